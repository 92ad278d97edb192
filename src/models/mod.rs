//! The catalog's contract: every shape we send to or get back from it.
//!
//! These are plain values. They're created by deserializing a catalog
//! response and thrown away when the next search or detail fetch replaces
//! them.

pub mod copyright;
pub mod image;
pub mod search;
pub mod tags;
pub mod write;

pub use copyright::{Author, Copyright, License};
pub use image::{EditorNote, ImageAltText, ImageCaption, ImageMetaInformation, ImageTitle};
pub use search::{ImageMetaSummary, SearchParams, SearchResult};
pub use tags::{ImageTag, TagsSearchResult};
pub use write::{
    NewImageMetaInformation, UpdateImageMetaInformation, ValidationError, ValidationMessage,
};

/// A field the catalog sends as either one object or a list of them.
///
/// Older catalog versions sent every translation of a title in a list.
/// Newer ones send only the requested language.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Everything inside, in the order the catalog sent it.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(one) => core::slice::from_ref(one).iter(),
            OneOrMany::Many(many) => many.iter(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(many) => many.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_or_many_reads_both_shapes() {
        let one: OneOrMany<ImageTitle> =
            serde_json::from_str(r#"{"title": "Fjell", "language": "nb"}"#).unwrap();
        assert_eq!(one.len(), 1);

        let many: OneOrMany<ImageTitle> = serde_json::from_str(
            r#"[{"title": "Fjell", "language": "nb"}, {"title": "Mountain", "language": "en"}]"#,
        )
        .unwrap();
        assert_eq!(
            many.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["Fjell", "Mountain"]
        );
    }
}
