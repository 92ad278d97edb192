//! How requests reach the catalog.
//!
//! The controller only knows about the [`Transport`] trait. [`HttpTransport`]
//! is the real one; tests bring their own.

use serde::de::DeserializeOwned;

use crate::error::{MappingError, TransportError};

pub mod http;

pub use http::HttpTransport;

/// Something that can perform a GET against the catalog.
///
/// One attempt per call. Retrying, if anyone wants it, belongs in here and
/// not in the controller.
#[allow(async_fn_in_trait, reason = "the controller drives one task")]
pub trait Transport {
    /// Sends `GET url?params`.
    ///
    /// A response with any status is an `Ok`. Only a request that didn't
    /// complete at all is an `Err`.
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<TransportResponse, TransportError>;
}

/// Whatever the catalog answered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Hands back the body, or a [`TransportError::Status`] for non-2xx
    /// answers.
    pub fn into_body(self, url: &str) -> Result<String, TransportError> {
        if !self.is_success() {
            tracing::warn!("catalog answered `{url}` with status {}", self.status);
            return Err(TransportError::Status {
                url: url.to_string(),
                status: self.status,
                body: self.body,
            });
        }

        Ok(self.body)
    }
}

/// Parses a response body into one of the catalog's shapes.
///
/// This is the only place raw JSON becomes typed data. `shape` names the
/// expected type in the error.
pub fn decode<T: DeserializeOwned>(body: &str, shape: &'static str) -> Result<T, MappingError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("failed to decode `{shape}`. err: {e}");
        MappingError::Decode(shape, e)
    })
}

#[cfg(test)]
mod tests {
    use crate::models::SearchResult;

    use super::*;

    #[test]
    fn non_success_is_an_error() {
        let resp = TransportResponse::new(503, "down for maintenance");
        assert!(!resp.is_success());

        let err = resp.into_body("https://api.example.org/images").unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 503, .. }));

        let body = TransportResponse::new(204, "")
            .into_body("https://api.example.org/images")
            .unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn decode_names_the_shape() {
        let err = decode::<SearchResult>(r#"{"results": []}"#, "SearchResult").unwrap_err();

        match err {
            MappingError::Decode(shape, e) => {
                assert_eq!(shape, "SearchResult");
                assert!(e.to_string().contains("totalCount"), "{e}");
            }
            other => panic!("expected a decode error, got {other:?}"),
        }
    }
}
