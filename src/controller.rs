//! The view-state controller.
//!
//! It sequences every user action the same way: build the request, send
//! it, map the answer, update the [`ViewState`], then tell the renderer.
//!
//! Everything runs on one task. Several requests may be in flight at once
//! (a user can search again before the last search came back). Each one is
//! numbered, and only the answer to the newest request is ever applied. Late
//! answers to older requests are dropped.

use core::cell::{Cell, Ref, RefCell};

use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{CatalogError, TransportError},
    models::{ImageMetaInformation, SearchResult},
    search::{SearchInputs, ToQuery as _},
    transport::{decode, HttpTransport, Transport},
    view::{map_detail, map_listing, Notice, Pane, Render, TagFilter, ViewState},
};

/// What happened to a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// It was the newest, so it's on screen now.
    Applied,

    /// A newer request was issued while this one was out. Nothing changed.
    Discarded,
}

pub struct ViewController<T, R> {
    config: Config,
    transport: T,
    render: RefCell<R>,
    state: RefCell<ViewState>,

    /// The number of the newest request issued so far.
    latest: Cell<u64>,
}

impl<R: Render> ViewController<HttpTransport, R> {
    /// A controller that talks to the configured catalog over HTTP.
    pub fn connect(config: Config, render: R) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.catalog)?;
        Ok(Self::new(config, transport, render))
    }
}

impl<T: Transport, R: Render> ViewController<T, R> {
    /// Starts out listing, with no results and no detail.
    pub fn new(config: Config, transport: T, render: R) -> Self {
        Self {
            config,
            transport,
            render: RefCell::new(render),
            state: RefCell::new(ViewState::new()),
            latest: Cell::new(0),
        }
    }

    /// A snapshot of what's on screen.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn renderer(&self) -> Ref<'_, R> {
        self.render.borrow()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a search and shows its results.
    ///
    /// This always lands in the listing. If a detail is open, it's hidden
    /// as soon as the search starts.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, inputs: SearchInputs) -> Result<Outcome, CatalogError> {
        let seq = self.next_seq();

        self.update(|s| {
            if s.pane == Pane::Detailing {
                tracing::debug!("new search, hiding detail");
            }
            s.pane = Pane::Listing;
            s.detail = None;
        });

        let url = self.config.catalog.search_url();
        let params = inputs.to_query().encode(&self.config.params);
        let res = self
            .fetch::<SearchResult>(&url, &params, "SearchResult")
            .await;

        if !self.is_latest(seq) {
            tracing::debug!("discarding stale search response #{seq}");
            return Ok(Outcome::Discarded);
        }

        match res {
            Ok(result) => {
                let listing = map_listing(&result);
                tracing::debug!("search #{seq} found {} entries", listing.entries.len());

                self.update(|s| {
                    s.pane = Pane::Listing;
                    s.detail = None;
                    s.listing = listing;
                    s.inputs = inputs;
                    s.notice = None;
                });
                Ok(Outcome::Applied)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fetches the record behind a result and shows it.
    ///
    /// On failure we stay where we were and show a notice. Nothing partial
    /// is ever shown.
    #[tracing::instrument(skip(self))]
    pub async fn select_result(&self, detail_ref: &str) -> Result<Outcome, CatalogError> {
        let seq = self.next_seq();
        let url = self.config.catalog.resolve(detail_ref);

        let res = match self
            .fetch::<ImageMetaInformation>(&url, &[], "ImageMetaInformation")
            .await
        {
            Ok(record) => map_detail(&record).map_err(CatalogError::from),
            Err(e) => Err(e),
        };

        if !self.is_latest(seq) {
            tracing::debug!("discarding stale detail response #{seq}");
            return Ok(Outcome::Discarded);
        }

        match res {
            Ok(detail) => {
                tracing::debug!("showing detail for `{}`", detail.id);

                self.update(|s| {
                    s.pane = Pane::Detailing;
                    s.detail = Some(detail);
                    s.notice = None;
                });
                Ok(Outcome::Applied)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Searches for a tag from the open detail.
    ///
    /// Same as searching with the tag as the query. The other filters of the
    /// last search stay on.
    #[tracing::instrument(skip(self))]
    pub async fn select_tag(&self, tag: &TagFilter) -> Result<Outcome, CatalogError> {
        let inputs = tag.search_inputs(&self.state.borrow().inputs);
        self.search(inputs).await
    }

    async fn fetch<D: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(String, String)],
        shape: &'static str,
    ) -> Result<D, CatalogError> {
        let body = self.transport.get(url, params).await?.into_body(url)?;
        Ok(decode(&body, shape)?)
    }

    fn next_seq(&self) -> u64 {
        let seq = self.latest.get() + 1;
        self.latest.set(seq);
        seq
    }

    fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest.get()
    }

    /// Changes the state, then redraws.
    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.state.borrow_mut());
        self.render.borrow_mut().render(&self.state.borrow());
    }

    /// Surfaces a failure without touching anything else on screen.
    fn fail(&self, err: CatalogError) -> CatalogError {
        tracing::warn!("catalog request failed. err: {err}");

        let notice = Notice::from(&err);
        self.state.borrow_mut().notice = Some(notice.clone());
        self.render.borrow_mut().notice(&notice);
        err
    }
}
