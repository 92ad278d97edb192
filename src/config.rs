use camino::Utf8Path;

use crate::{error::ConfigError, search::params::ParamNames};

/// Everything the client needs to know to reach a catalog.
///
/// Unlike the view state, this never changes during a session. It's handed
/// to the controller once and read from there.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Where the catalog lives.
    pub catalog: CatalogConfig,

    /// How the catalog spells each search parameter.
    #[serde(default)]
    pub params: ParamNames,
}

impl Config {
    pub fn new(catalog: CatalogConfig, params: ParamNames) -> Self {
        Self { catalog, params }
    }

    /// Attempts to read a `Config` from a TOML file on disk.
    pub async fn from_disk(path: &Utf8Path) -> Result<Self, ConfigError> {
        // read the config from disk
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(ConfigError::ReadFailed)?;

        Self::from_toml(&s)
    }

    /// Parses (and checks) a `Config` from TOML text.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let conf: Self = toml::from_str(s).map_err(ConfigError::ParseFailed)?;

        // we build every url from this one, so it had better be absolute
        let base = conf.catalog.base_url.as_str();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            tracing::error!("refusing catalog base url `{base}`");
            return Err(ConfigError::InvalidBaseUrl(conf.catalog.base_url));
        }

        if let Some(param) = conf.params.first_blank() {
            tracing::error!("refusing blank name for search param {param}");
            return Err(ConfigError::BlankParamName(param));
        }

        tracing::debug!("loaded config for catalog at `{base}`");
        Ok(conf)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogConfig {
    /// Scheme + host (and optional path prefix) of the catalog,
    /// like `https://api.example.org`.
    pub base_url: String,

    /// The search endpoint, relative to `base_url`.
    #[serde(default = "CatalogConfig::default_search_path")]
    pub search_path: String,

    /// How long one request may take before we give up on it.
    #[serde(default = "CatalogConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            search_path: Self::default_search_path(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }

    fn default_search_path() -> String {
        String::from("/images")
    }

    fn default_timeout_secs() -> u64 {
        30
    }

    /// The absolute url of the search endpoint.
    pub fn search_url(&self) -> String {
        self.resolve(&self.search_path)
    }

    /// Makes a catalog reference (like a record's `metaUrl`) absolute.
    ///
    /// Absolute references are returned untouched. Protocol-relative ones
    /// (`//host/path`) borrow the base url's scheme.
    pub fn resolve(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return reference.to_string();
        }

        if reference.starts_with("//") {
            let scheme = self
                .base_url
                .split_once("://")
                .map_or("https", |(scheme, _)| scheme);
            return format!("{scheme}:{reference}");
        }

        let base = self.base_url.trim_end_matches('/');
        let path = reference.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
