use std::time::Duration;

use crate::{config::CatalogConfig, error::TransportError};

use super::{Transport, TransportResponse};

/// Talks to a real catalog over HTTP(S).
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(catalog: &CatalogConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(catalog.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("couldn't build the http client! err: {e}");
                TransportError::ClientSetup(e.to_string())
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[tracing::instrument(skip(self))]
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<TransportResponse, TransportError> {
        let unreachable = |e: reqwest::Error| TransportError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(params)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("request to `{url}` failed. err: {e}"))
            .map_err(unreachable)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(unreachable)?;

        tracing::debug!("`{url}` answered with status {status}");
        Ok(TransportResponse { status, body })
    }
}
