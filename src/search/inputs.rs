//! What a user typed into the search form.

/// The four independently-optional search inputs.
///
/// Values are kept as the user entered them. Even `minimum_size` is a
/// string: a non-numeric size goes to the catalog verbatim, and rejecting it
/// is the catalog's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchInputs {
    pub query: Option<String>,
    pub minimum_size: Option<String>,
    pub license: Option<String>,
    pub language: Option<String>,
}

impl SearchInputs {
    /// No filters at all.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the minimum size. Numbers end up as their decimal form; anything
    /// else is kept as written.
    pub fn minimum_size(mut self, size: impl core::fmt::Display) -> Self {
        self.minimum_size = Some(size.to_string());
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// The same inputs, but searching for `query` instead.
    ///
    /// Other filters are kept.
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        self.clone().query(query)
    }
}
