//! Turning what a user typed into a catalog search.

pub mod inputs;
pub mod params;
pub mod query;

pub use inputs::SearchInputs;
pub use params::{ParamNames, SearchParam};
pub use query::{Query, ToQuery};
