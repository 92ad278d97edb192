use core::error::Error;
use pisserror::Error;

use crate::search::SearchParam;

/// Anything that can go wrong while the controller talks to the catalog.
///
/// None of these are fatal. The controller keeps its previous state and
/// surfaces the error as a notice.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("The catalog request failed. See: `{_0}`")]
    Transport(#[from] TransportError),

    #[error("The catalog response couldn't be shown. See: `{_0}`")]
    Mapping(#[from] MappingError),
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// the request never completed (dns, tls, timeout, connection reset...)
    #[error("The request to `{url}` didn't complete. Reason: `{reason}`")]
    Unreachable { url: String, reason: String },

    /// the catalog answered, but not with a 2xx
    #[error("The catalog answered `{url}` with status {status}. Body: `{body}`")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to set up the HTTP client. Reason: `{_0}`")]
    ClientSetup(String),
}

#[derive(Debug, Error)]
pub enum MappingError {
    /// The body wasn't the shape we expected, or a required field was
    /// missing from the payload entirely.
    #[error("The catalog response couldn't be read as `{_0}`. See: `{_1}`")]
    Decode(&'static str, serde_json::Error),

    /// The payload parsed, but a field the detail view needs was blank.
    #[error("The catalog record `{id}` was missing required field `{field}`.")]
    MissingField { id: String, field: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// during fs read from disk
    #[error("Failed to read config file. See: `{_0}`")]
    ReadFailed(#[from] tokio::io::Error),

    /// parsing
    #[error("Failed to parse config file. See: `{_0}`")]
    ParseFailed(#[from] toml::de::Error),

    /// the catalog's base url has to be absolute (`http(s)://host`)
    #[error("The configured catalog base url `{_0}` isn't an absolute http(s) url.")]
    InvalidBaseUrl(String),

    /// a `[params]` entry spelled as nothing would send `=value`
    #[error("The configured name for search parameter `{_0}` is blank.")]
    BlankParamName(SearchParam),
}
