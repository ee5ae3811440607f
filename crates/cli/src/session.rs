use std::path::Path;

use anyhow::Result;
use lexicon_search::{Document, SearchOptions, SearchSummary, Searcher, normalize_query};

use crate::config::CliConfig;
use crate::page::Page;

/// One displayed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub visible: bool,
    pub exact: bool,
}

/// A loaded page wired to its searcher.
pub struct Session {
    page: Page,
    searcher: Searcher<Document>,
    marker_class: String,
}

impl Session {
    /// Loads the page named by `page_override`, the config, or the sample page.
    pub fn open(config: &CliConfig, page_override: Option<&Path>) -> Result<Self> {
        let path = page_override.or(config.page.as_deref());
        let page = Page::load(path, &config.entry_class)?;
        Ok(Self::from_page(page, config))
    }

    pub fn from_page(page: Page, config: &CliConfig) -> Self {
        let options = SearchOptions {
            marker_class: config.marker_class.clone(),
        };
        let searcher = Searcher::with_options(&page.doc, page.entries.iter().copied(), options);
        Self {
            page,
            searcher,
            marker_class: config.marker_class.clone(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn searcher(&self) -> &Searcher<Document> {
        &self.searcher
    }

    /// Normalizes `raw` and runs it against the page.
    pub fn search(&mut self, raw: &str) -> SearchSummary {
        let query = normalize_query(raw);
        self.searcher.search(&mut self.page.doc, &query)
    }

    pub fn reset(&mut self) -> SearchSummary {
        self.searcher.reset(&mut self.page.doc)
    }

    /// Entries in container order with their display state.
    pub fn rows(&self) -> Vec<Row> {
        self.page
            .displayed()
            .into_iter()
            .map(|id| Row {
                label: self.page.label(id),
                visible: self.page.doc.is_visible(id),
                exact: self.page.doc.has_class(id, &self.marker_class),
            })
            .collect()
    }

    pub fn visible_rows(&self) -> Vec<Row> {
        self.rows().into_iter().filter(|row| row.visible).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Session {
        Session::open(&CliConfig::default(), None).unwrap()
    }

    fn words(rows: &[Row]) -> Vec<String> {
        rows.iter()
            .map(|row| row.label.split_whitespace().next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn search_normalizes_raw_input() {
        let mut session = sample();
        let summary = session.search("  APPLE ");

        assert_eq!(summary.exact, 2);
        let rows = session.visible_rows();
        assert_eq!(words(&rows[..2]), vec!["Apple", "Pineapple"]);
        assert!(rows[..2].iter().all(|row| row.exact));
    }

    #[test]
    fn partial_matches_follow_exact_matches() {
        let mut session = sample();
        let summary = session.search("berry");

        assert_eq!((summary.exact, summary.partial), (2, 1));
        let rows = session.visible_rows();
        assert_eq!(words(&rows), vec!["Blueberry", "Raspberry", "Strawberry"]);
        let exact: Vec<bool> = rows.iter().map(|row| row.exact).collect();
        assert_eq!(exact, vec![true, true, false]);
    }

    #[test]
    fn whitespace_query_resets() {
        let mut session = sample();
        let total = session.searcher().len();
        session.search("kiwi");
        assert_eq!(session.visible_rows().len(), 1);

        let summary = session.search("   ");
        assert_eq!(summary.visible(), total);
        assert_eq!(session.visible_rows().len(), total);
        assert_eq!(words(&session.rows()[..2]), vec!["Apple", "Avocado"]);
    }

    #[test]
    fn custom_marker_class_is_reported() {
        let config = CliConfig {
            marker_class: "hit".to_string(),
            ..CliConfig::default()
        };
        let mut session = Session::open(&config, None).unwrap();
        session.search("lemon");

        let rows = session.visible_rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].exact);
        assert!(session.page().doc.has_class(session.page().entries[11], "hit"));
    }
}
