use crate::models::{ImageMetaSummary, SearchResult};

/// The search results, ready to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingView {
    /// How many hits the catalog has in total, across all pages.
    pub total_count: u64,

    /// In the catalog's order.
    pub entries: Vec<PreviewEntry>,
}

impl ListingView {
    /// Nothing found. Not an error!
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One clickable preview in the result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewEntry {
    pub id: String,
    pub title: String,
    pub preview_url: String,

    /// Where to fetch the full record when this entry is selected.
    pub detail_ref: String,
}

impl From<&ImageMetaSummary> for PreviewEntry {
    fn from(summary: &ImageMetaSummary) -> Self {
        Self {
            id: summary.id.clone(),
            title: summary.title.title.clone(),
            preview_url: summary.preview_url.clone(),
            detail_ref: summary.meta_url.clone(),
        }
    }
}

/// Maps a page of search hits into previews, keeping the catalog's order.
#[tracing::instrument(skip_all)]
pub fn map_listing(result: &SearchResult) -> ListingView {
    tracing::debug!(
        "mapping {} of {} hits",
        result.results.len(),
        result.total_count
    );

    ListingView {
        total_count: result.total_count,
        entries: result.results.iter().map(PreviewEntry::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{ImageAltText, ImageTitle};

    use super::*;

    fn summary(id: &str) -> ImageMetaSummary {
        ImageMetaSummary {
            id: id.into(),
            title: ImageTitle {
                title: format!("title {id}"),
                language: "nb".into(),
            },
            contributors: vec![],
            alt_text: ImageAltText::default(),
            preview_url: format!("https://api.example.org/raw/{id}.jpg"),
            meta_url: format!("https://api.example.org/images/{id}"),
            license: "CC-BY-4.0".into(),
            supported_languages: vec!["nb".into()],
            model_release: None,
            editor_notes: None,
        }
    }

    #[test]
    fn keeps_order_and_count() {
        let result = SearchResult {
            total_count: 57,
            page: Some(1),
            page_size: Some(3),
            language: None,
            results: vec![summary("a"), summary("b"), summary("c")],
        };

        let view = map_listing(&result);
        assert_eq!(view.total_count, 57);
        assert_eq!(
            view.entries
                .iter()
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(view.entries[1].detail_ref, "https://api.example.org/images/b");
        assert_eq!(view.entries[1].preview_url, "https://api.example.org/raw/b.jpg");
    }

    #[test]
    fn no_results_is_fine() {
        let result = SearchResult {
            total_count: 0,
            page: None,
            page_size: None,
            language: None,
            results: vec![],
        };

        let view = map_listing(&result);
        assert!(view.is_empty());
        assert_eq!(view.total_count, 0);
    }
}
