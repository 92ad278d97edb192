//! Search parameter names.
//!
//! The catalog has spelled its parameters differently over time (`tags` vs.
//! `query`, `minimumSize` vs. `minimum-size`). Everything in this crate talks
//! about [`SearchParam`]s. Only [`ParamNames::name`] knows how the catalog
//! wants them spelled.

/// Every logical search filter, independent of how any catalog spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchParam {
    Query,
    MinimumSize,
    License,
    Language,
    IncludeCopyrighted,
    Sort,
    Page,
    PageSize,
    ScrollId,
    ModelReleased,
}

impl SearchParam {
    /// Every parameter, in the order a query sends them.
    pub const ALL: [SearchParam; 10] = [
        SearchParam::Query,
        SearchParam::MinimumSize,
        SearchParam::License,
        SearchParam::Language,
        SearchParam::IncludeCopyrighted,
        SearchParam::Sort,
        SearchParam::Page,
        SearchParam::PageSize,
        SearchParam::ScrollId,
        SearchParam::ModelReleased,
    ];
}

impl core::fmt::Display for SearchParam {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SearchParam::Query => write!(f, "Query"),
            SearchParam::MinimumSize => write!(f, "MinimumSize"),
            SearchParam::License => write!(f, "License"),
            SearchParam::Language => write!(f, "Language"),
            SearchParam::IncludeCopyrighted => write!(f, "IncludeCopyrighted"),
            SearchParam::Sort => write!(f, "Sort"),
            SearchParam::Page => write!(f, "Page"),
            SearchParam::PageSize => write!(f, "PageSize"),
            SearchParam::ScrollId => write!(f, "ScrollId"),
            SearchParam::ModelReleased => write!(f, "ModelReleased"),
        }
    }
}

/// The catalog-facing spelling of each [`SearchParam`].
///
/// Names are case-sensitive and sent exactly as written here. Override them
/// in the `[params]` table of the config file when a catalog disagrees.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParamNames {
    pub query: String,
    pub minimum_size: String,
    pub license: String,
    pub language: String,
    pub include_copyrighted: String,
    pub sort: String,
    pub page: String,
    pub page_size: String,
    pub scroll_id: String,
    pub model_released: String,
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            query: "query".into(),
            minimum_size: "minimum-size".into(),
            license: "license".into(),
            language: "language".into(),
            include_copyrighted: "include-copyrighted".into(),
            sort: "sort".into(),
            page: "page".into(),
            page_size: "page-size".into(),
            scroll_id: "search-context".into(),
            model_released: "model-released".into(),
        }
    }
}

impl ParamNames {
    /// How the catalog spells `param`.
    pub fn name(&self, param: SearchParam) -> &str {
        match param {
            SearchParam::Query => &self.query,
            SearchParam::MinimumSize => &self.minimum_size,
            SearchParam::License => &self.license,
            SearchParam::Language => &self.language,
            SearchParam::IncludeCopyrighted => &self.include_copyrighted,
            SearchParam::Sort => &self.sort,
            SearchParam::Page => &self.page,
            SearchParam::PageSize => &self.page_size,
            SearchParam::ScrollId => &self.scroll_id,
            SearchParam::ModelReleased => &self.model_released,
        }
    }

    /// The first parameter spelled as nothing at all, if any.
    pub fn first_blank(&self) -> Option<SearchParam> {
        SearchParam::ALL
            .into_iter()
            .find(|p| self.name(*p).trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_spell_everything() {
        let names = ParamNames::default();
        assert_eq!(names.first_blank(), None);
        assert_eq!(names.name(SearchParam::ScrollId), "search-context");
    }

    #[test]
    fn blank_spelling_is_found() {
        let names = ParamNames {
            license: " ".into(),
            page: String::new(),
            ..Default::default()
        };
        assert_eq!(names.first_blank(), Some(SearchParam::License));
    }
}
