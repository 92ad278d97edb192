//! The catalog's write API.
//!
//! The client doesn't create or edit records, but these shapes are part of
//! the same contract, so they live here too.

use super::copyright::Copyright;

#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImageMetaInformation {
    pub title: String,
    pub alttext: String,
    pub copyright: Copyright,
    pub tags: Vec<String>,
    pub caption: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_released: Option<String>,
}

/// A partial update in one language. `None` fields are left alone.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageMetaInformation {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alttext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<Copyright>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_released: Option<String>,
}

/// The catalog's answer to a rejected write.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub code: String,
    pub description: String,
    pub messages: Vec<ValidationMessage>,
    pub occurred_at: String,
}

#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ValidationMessage {
    pub field: String,
    pub message: String,
}
