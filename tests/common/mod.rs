//! The parent of the other tests.
//!
//! A fake catalog, a renderer that remembers what it drew, and some canned
//! catalog responses.

use core::cell::RefCell;
use std::{collections::HashMap, str::FromStr as _};

use futures::channel::oneshot;
use imagecat::{
    config::{CatalogConfig, Config},
    error::TransportError,
    search::ParamNames,
    transport::{Transport, TransportResponse},
    view::{Notice, Render, ViewState},
};
use serde_json::json;
use tracing_subscriber::{filter, layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer};

pub const BASE: &str = "https://catalog.example.org";

/// call this at the top of any new test func! :)
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn setup() {
    // other tests in this binary may have set it up already. that's fine
    _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_filter(filter::EnvFilter::from_str("DEBUG,reqwest=INFO").unwrap()),
        )
        .try_init();
}

#[allow(dead_code, reason = "it's used in the other tests")]
pub fn config() -> Config {
    Config::new(CatalogConfig::new(BASE), ParamNames::default())
}

/// The key a request is filed under: `url?k=v&k=v`.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn key(url: &str, params: &[(String, String)]) -> String {
    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{url}?{query}")
}

/// The key of a search request with the given (already spelled) params.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn search_key(params: &[(&str, &str)]) -> String {
    let params = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<Vec<_>>();
    key(&format!("{BASE}/images"), &params)
}

#[allow(dead_code, reason = "it's used in the other tests")]
pub fn detail_key(id: &str) -> String {
    key(&format!("{BASE}/images/{id}"), &[])
}

#[derive(Clone, Debug)]
enum Reply {
    Respond(TransportResponse),
    Unreachable,
    /// answer later, with [`FakeCatalog::release`]
    Hold,
}

/// A catalog that answers from a script.
///
/// Anything without a route is unreachable.
#[derive(Default)]
pub struct FakeCatalog {
    routes: RefCell<HashMap<String, Reply>>,
    held: RefCell<Vec<(String, oneshot::Sender<TransportResponse>)>>,

    /// Every request we've seen, in order.
    pub requests: RefCell<Vec<String>>,
}

#[allow(dead_code, reason = "it's used in the other tests")]
impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, key: impl Into<String>, status: u16, body: impl Into<String>) {
        self.routes
            .borrow_mut()
            .insert(key.into(), Reply::Respond(TransportResponse::new(status, body)));
    }

    pub fn unreachable(&self, key: impl Into<String>) {
        self.routes.borrow_mut().insert(key.into(), Reply::Unreachable);
    }

    pub fn hold(&self, key: impl Into<String>) {
        self.routes.borrow_mut().insert(key.into(), Reply::Hold);
    }

    /// Answers a held request.
    pub fn release(&self, key: &str, status: u16, body: impl Into<String>) {
        let mut held = self.held.borrow_mut();
        let idx = held
            .iter()
            .position(|(k, _)| k == key)
            .unwrap_or_else(|| panic!("no held request for `{key}`"));

        let (_, tx) = held.remove(idx);
        tx.send(TransportResponse::new(status, body))
            .expect("the requester should still be waiting");
    }
}

impl Transport for &FakeCatalog {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<TransportResponse, TransportError> {
        let key = key(url, params);
        self.requests.borrow_mut().push(key.clone());

        let reply = self.routes.borrow().get(&key).cloned();
        match reply {
            Some(Reply::Respond(resp)) => Ok(resp),
            Some(Reply::Hold) => {
                let (tx, rx) = oneshot::channel();
                self.held.borrow_mut().push((key, tx));

                rx.await.map_err(|_| TransportError::Unreachable {
                    url: url.to_string(),
                    reason: "held request was dropped".into(),
                })
            }
            Some(Reply::Unreachable) | None => Err(TransportError::Unreachable {
                url: url.to_string(),
                reason: "connection refused".into(),
            }),
        }
    }
}

/// Remembers everything it was asked to draw.
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: Vec<ViewState>,
    pub notices: Vec<Notice>,
}

impl Render for Recorder {
    fn render(&mut self, state: &ViewState) {
        self.frames.push(state.clone());
    }

    fn notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

/// A search response with one summary per id.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn search_body(ids: &[&str]) -> String {
    let results = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": { "title": format!("Bilde {id}"), "language": "nb" },
                "contributors": ["Kari Nordmann"],
                "altText": { "alttext": format!("Alt {id}"), "language": "nb" },
                "previewUrl": format!("{BASE}/raw/{id}.jpg"),
                "metaUrl": format!("{BASE}/images/{id}"),
                "license": "CC-BY-SA-4.0",
                "supportedLanguages": ["nb", "en"]
            })
        })
        .collect::<Vec<_>>();

    json!({
        "totalCount": ids.len(),
        "page": 1,
        "pageSize": 10,
        "language": "nb",
        "results": results
    })
    .to_string()
}

/// A full record, as the catalog would send it.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn record_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "metaUrl": format!("{BASE}/images/{id}"),
        "title": { "title": "Solnedgang", "language": "nb" },
        "alttext": { "alttext": "Sola går ned over havet", "language": "nb" },
        "imageUrl": format!("{BASE}/raw/{id}.jpg"),
        "size": 2_345_678,
        "contentType": "image/jpeg",
        "copyright": {
            "license": {
                "license": "CC-BY-SA-4.0",
                "description": "Creative Commons Attribution-ShareAlike 4.0 International",
                "url": "https://creativecommons.org/licenses/by-sa/4.0/"
            },
            "origin": "https://photos.example.org/sunset",
            "creators": [{ "type": "Fotograf", "name": "Kari Nordmann" }],
            "processors": [],
            "rightsholders": [{ "type": "Leverandør", "name": "Bildebyrå AS" }]
        },
        "tags": { "tags": ["sunset", "sea"], "language": "nb" },
        "caption": { "caption": "Kveld", "language": "nb" },
        "supportedLanguages": ["nb"],
        "created": "2019-06-01T18:30:00Z",
        "createdBy": "import",
        "modelRelease": "not-applicable"
    })
}

#[allow(dead_code, reason = "it's used in the other tests")]
pub fn record_body(id: &str) -> String {
    record_json(id).to_string()
}
