use crate::models::SearchParams;

use super::{
    inputs::SearchInputs,
    params::{ParamNames, SearchParam},
};

/// A canonical search query: the parameters to send, in a fixed order.
///
/// Parameters are named by [`SearchParam`]. Use [`Query::encode`] to spell
/// them the way a catalog expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Query {
    pairs: Vec<(SearchParam, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pairs(&self) -> &[(SearchParam, String)] {
        &self.pairs
    }

    /// The value sent for `param`, if any.
    pub fn get(&self, param: SearchParam) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Spells each parameter the way the catalog wants it.
    pub fn encode(&self, names: &ParamNames) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .map(|(param, value)| (names.name(*param).to_string(), value.clone()))
            .collect()
    }

    /// Adds a text parameter, unless the text is missing or only whitespace.
    ///
    /// Anything else is sent exactly as given.
    fn push_text(&mut self, param: SearchParam, value: Option<&str>) {
        match value {
            Some(v) if !v.trim().is_empty() => {
                tracing::debug!("adding {param} = `{v}`");
                self.pairs.push((param, v.to_string()));
            }
            Some(_) => tracing::debug!("skipping blank {param}"),
            None => (),
        }
    }

    fn push_display(&mut self, param: SearchParam, value: Option<impl core::fmt::Display>) {
        if let Some(v) = value {
            tracing::debug!("adding {param} = `{v}`");
            self.pairs.push((param, v.to_string()));
        }
    }
}

/// Turns search inputs into a [`Query`].
///
/// Never fails. A bad value is the catalog's problem, not ours. The same
/// input always yields the same pairs in the same order.
pub trait ToQuery {
    fn to_query(&self) -> Query;
}

impl ToQuery for SearchInputs {
    #[tracing::instrument]
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_text(SearchParam::Query, self.query.as_deref());
        q.push_text(SearchParam::MinimumSize, self.minimum_size.as_deref());
        q.push_text(SearchParam::License, self.license.as_deref());
        q.push_text(SearchParam::Language, self.language.as_deref());
        q
    }
}

impl ToQuery for SearchParams {
    #[tracing::instrument]
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.push_text(SearchParam::Query, self.query.as_deref());
        q.push_display(SearchParam::MinimumSize, self.minimum_size);
        q.push_text(SearchParam::License, self.license.as_deref());
        q.push_text(SearchParam::Language, self.language.as_deref());
        q.push_display(SearchParam::IncludeCopyrighted, self.include_copyrighted);
        q.push_text(SearchParam::Sort, self.sort.as_deref());
        q.push_display(SearchParam::Page, self.page);
        q.push_display(SearchParam::PageSize, self.page_size);
        q.push_text(SearchParam::ScrollId, self.scroll_id.as_deref());

        // the catalog takes a comma-separated list here
        if let Some(released) = &self.model_released {
            let joined = released
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(",");
            q.push_text(SearchParam::ModelReleased, Some(joined.as_str()));
        }

        q
    }
}
