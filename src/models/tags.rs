//! Tags in all their glory.

/// The tags on one image, all in one language.
///
/// Each tag is a plain string. Selecting one in the detail view searches for
/// it, so the string has to be usable as a search query as-is.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ImageTag {
    pub tags: Vec<String>,
    pub language: String,
}

/// What the catalog's tag search answers with.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsSearchResult {
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub language: String,
    pub results: Vec<String>,
}
