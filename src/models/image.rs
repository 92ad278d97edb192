use chrono::{DateTime, FixedOffset};

use super::{copyright::Copyright, tags::ImageTag, OneOrMany};

/// One image's full metadata record.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetaInformation {
    pub id: String,

    /// The address of this record.
    pub meta_url: String,

    pub title: OneOrMany<ImageTitle>,
    pub alttext: OneOrMany<ImageAltText>,

    /// The full-size image.
    pub image_url: String,

    /// Size of the full-size image, in bytes.
    pub size: u64,

    /// The image's MIME type, like `image/jpeg`.
    pub content_type: String,

    pub copyright: Copyright,

    #[serde(default)]
    pub tags: ImageTag,

    #[serde(default)]
    pub caption: ImageCaption,

    #[serde(default)]
    pub supported_languages: Vec<String>,

    /// When the record was created. Usually RFC 3339, but we don't insist.
    #[serde(default)]
    pub created: String,

    #[serde(default)]
    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_release: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_notes: Option<Vec<EditorNote>>,
}

impl ImageMetaInformation {
    /// The creation time, if the catalog sent a parsable one.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created).ok()
    }
}

#[derive(Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ImageTitle {
    pub title: String,
    pub language: String,
}

#[derive(Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ImageAltText {
    pub alttext: String,
    pub language: String,
}

#[derive(Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ImageCaption {
    pub caption: String,
    pub language: String,
}

/// An audit entry. These are only ever appended, and we only ever show them.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorNote {
    pub timestamp: String,
    pub updated_by: String,
    pub note: String,
}

impl EditorNote {
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}
