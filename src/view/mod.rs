//! What the user sees, and the mappers that produce it.
//!
//! The mappers are pure. [`ViewState`] is owned by the controller and
//! handed to the render capability after every change.

pub mod detail;
pub mod listing;

pub use detail::{map_detail, DetailView, TagFilter};
pub use listing::{map_listing, ListingView, PreviewEntry};

use crate::{error::CatalogError, search::SearchInputs};

/// Which of the two panes is in front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pane {
    /// The result list. Detail is hidden.
    #[default]
    Listing,

    /// One record's detail, shown over the (still present) results.
    Detailing,
}

/// Something went wrong, and the user should hear about it.
///
/// Notices never block. The previous view stays put.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoticeKind {
    /// The request failed or got a bad status.
    Transport,
    /// The response came back, but we couldn't show it.
    Mapping,
}

impl From<&CatalogError> for Notice {
    fn from(err: &CatalogError) -> Self {
        let kind = match err {
            CatalogError::Transport(_) => NoticeKind::Transport,
            CatalogError::Mapping(_) => NoticeKind::Mapping,
        };

        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// Everything currently on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub pane: Pane,

    /// The latest applied search results.
    pub listing: ListingView,

    /// Only `Some` while detailing.
    pub detail: Option<DetailView>,

    /// The last failure, if the last thing we tried failed.
    pub notice: Option<Notice>,

    /// The inputs of the latest search. Tag selection builds on these.
    pub inputs: SearchInputs,
}

impl ViewState {
    /// Listing, no results, no detail.
    pub fn new() -> Self {
        Self::default()
    }

    /// The view-model that belongs in front right now.
    pub fn screen(&self) -> Screen<'_> {
        match (self.pane, &self.detail) {
            (Pane::Detailing, Some(detail)) => Screen::Detail(detail),
            _ => Screen::Listing(&self.listing),
        }
    }
}

/// The view-model the render capability should draw in front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    Listing(&'a ListingView),
    Detail(&'a DetailView),
}

/// Puts a [`ViewState`] on the visible surface.
///
/// This is assumed to always succeed.
pub trait Render {
    /// Draws `state`. Called after every applied change.
    fn render(&mut self, state: &ViewState);

    /// Shows a non-blocking notice about a failure.
    fn notice(&mut self, notice: &Notice);
}
