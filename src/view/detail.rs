//! The full record, ready to show.

use chrono::{DateTime, FixedOffset};

use crate::{
    error::MappingError,
    models::{Author, EditorNote, ImageMetaInformation},
    search::SearchInputs,
};

/// Put between author names. Never after the last one.
pub const AUTHOR_SEPARATOR: &str = ", ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub meta_url: String,

    /// One line per title the catalog sent, like `Fjell (nb)`.
    pub titles: Vec<String>,
    /// One line per alt-text, same format as the titles.
    pub alt_texts: Vec<String>,
    /// Empty when the record has no caption.
    pub captions: Vec<String>,

    pub image: ImageView,
    pub license: LicenseView,

    /// Where the image came from. `None` when the record doesn't say.
    pub origin: Option<Link>,

    /// Creators, processors and rightsholders, in that order.
    pub authors: String,

    /// Each tag can be clicked to search for it.
    pub tags: Vec<TagFilter>,
    pub tag_language: String,

    pub supported_languages: Vec<String>,
    pub created: String,
    pub created_by: String,
    pub model_release: Option<String>,
    pub editor_notes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    /// bytes
    pub size: u64,
    pub content_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LicenseView {
    pub code: String,
    pub description: String,
    /// Link the description here, when we have it.
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// A tag in the detail view. Selecting it searches for exactly this string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagFilter(pub String);

impl TagFilter {
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// The inputs for the search this tag triggers.
    ///
    /// Only the query changes. Size/license/language filters are kept.
    pub fn search_inputs(&self, previous: &SearchInputs) -> SearchInputs {
        previous.with_query(self.0.clone())
    }
}

/// Joins author names with [`AUTHOR_SEPARATOR`], keeping their order.
pub fn join_authors<'a>(authors: impl IntoIterator<Item = &'a Author>) -> String {
    authors
        .into_iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(AUTHOR_SEPARATOR)
}

/// Maps a full record into its detail view.
///
/// ## Errors
///
/// Fails if the image url, the record's own url or the license code is
/// blank. Optional bits (editor notes, model release, origin...) just show
/// up empty.
#[tracing::instrument(skip_all, fields(id = %record.id))]
pub fn map_detail(record: &ImageMetaInformation) -> Result<DetailView, MappingError> {
    require(record, "imageUrl", &record.image_url)?;
    require(record, "metaUrl", &record.meta_url)?;
    require(record, "copyright.license", &record.copyright.license.license)?;

    let copyright = &record.copyright;
    let license = LicenseView {
        code: copyright.license.license.clone(),
        description: copyright.license.description.clone(),
        url: copyright.license.url.clone().filter(|u| !u.trim().is_empty()),
    };

    let origin = (!copyright.origin.trim().is_empty()).then(|| Link {
        href: copyright.origin.clone(),
        text: copyright.origin.clone(),
    });

    let captions = if record.caption.caption.trim().is_empty() {
        Vec::new()
    } else {
        vec![line(&record.caption.caption, &record.caption.language)]
    };

    let editor_notes = record
        .editor_notes
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(note_line)
        .collect();

    tracing::debug!("mapped record with {} tags", record.tags.tags.len());

    Ok(DetailView {
        id: record.id.clone(),
        meta_url: record.meta_url.clone(),
        titles: record
            .title
            .iter()
            .map(|t| line(&t.title, &t.language))
            .collect(),
        alt_texts: record
            .alttext
            .iter()
            .map(|a| line(&a.alttext, &a.language))
            .collect(),
        captions,
        image: ImageView {
            url: record.image_url.clone(),
            size: record.size,
            content_type: record.content_type.clone(),
        },
        license,
        origin,
        authors: join_authors(copyright.authors()),
        tags: record.tags.tags.iter().cloned().map(TagFilter).collect(),
        tag_language: record.tags.language.clone(),
        supported_languages: record.supported_languages.clone(),
        created: record
            .created_at()
            .map(stamp)
            .unwrap_or_else(|| record.created.clone()),
        created_by: record.created_by.clone(),
        model_release: record.model_release.clone(),
        editor_notes,
    })
}

fn require(
    record: &ImageMetaInformation,
    field: &'static str,
    value: &str,
) -> Result<(), MappingError> {
    if value.trim().is_empty() {
        tracing::warn!("record `{}` has no `{field}`", record.id);
        return Err(MappingError::MissingField {
            id: record.id.clone(),
            field,
        });
    }

    Ok(())
}

/// `text (language)`, or just `text` if there's no language.
fn line(text: &str, language: &str) -> String {
    if language.is_empty() {
        text.to_string()
    } else {
        format!("{text} ({language})")
    }
}

fn stamp(dt: DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

fn note_line(note: &EditorNote) -> String {
    let when = note
        .parsed_timestamp()
        .map(stamp)
        .unwrap_or_else(|| note.timestamp.clone());

    format!("{when} {}: {}", note.updated_by, note.note)
}
