use super::image::{ImageAltText, ImageTitle};

/// Every filter the catalog's search understands.
///
/// A `None` means "don't filter on this", never "use some default".
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// In pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_copyrighted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_released: Option<Vec<String>>,
}

/// One page of search hits.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub total_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// In the catalog's order. Keep it that way.
    pub results: Vec<ImageMetaSummary>,
}

/// The lightweight preview of a record that search hands back.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetaSummary {
    pub id: String,
    pub title: ImageTitle,

    #[serde(default)]
    pub contributors: Vec<String>,

    pub alt_text: ImageAltText,
    pub preview_url: String,

    /// Where to fetch the full record.
    pub meta_url: String,

    /// The license code.
    pub license: String,

    #[serde(default)]
    pub supported_languages: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_notes: Option<Vec<String>>,
}
