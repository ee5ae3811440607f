use crate::dom::Dom;
use crate::tokens::{TokenSet, all_tokens};

pub const DEFAULT_MARKER_CLASS: &str = "exact-match";

/// Match quality of an entry against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The query is one of the entry's tokens.
    Exact,
    /// Some token contains the query.
    Partial,
    Miss,
}

/// Normalizes raw input into a query: trimmed and lower-cased.
///
/// Hosts call this on every input change before [`Searcher::search`].
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classifies `tokens` against an already normalized, non-empty `query`.
pub fn classify(tokens: &TokenSet, query: &str) -> Tier {
    if tokens.contains(query) {
        Tier::Exact
    } else if tokens.iter().any(|token| token.contains(query)) {
        Tier::Partial
    } else {
        Tier::Miss
    }
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub marker_class: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
        }
    }
}

/// Counts left behind by a search or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchSummary {
    pub total: usize,
    pub exact: usize,
    pub partial: usize,
    pub hidden: usize,
}

impl SearchSummary {
    pub fn visible(&self) -> usize {
        self.total - self.hidden
    }
}

/// One searchable element and the tokens indexed from it.
#[derive(Debug, Clone)]
pub struct Entry<N> {
    node: N,
    tokens: TokenSet,
}

impl<N> Entry<N> {
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }
}

/// Shows, hides and reorders a fixed set of elements by query.
///
/// Tokens are computed once in [`Searcher::new`]; later changes to element
/// content are not picked up. Every entry's element must keep the same
/// parent for the searcher's lifetime.
pub struct Searcher<D: Dom> {
    entries: Vec<Entry<D::Node>>,
    options: SearchOptions,
}

impl<D: Dom> Searcher<D> {
    pub fn new<I>(dom: &D, elements: I) -> Self
    where
        I: IntoIterator<Item = D::Node>,
    {
        Self::with_options(dom, elements, SearchOptions::default())
    }

    pub fn with_options<I>(dom: &D, elements: I, options: SearchOptions) -> Self
    where
        I: IntoIterator<Item = D::Node>,
    {
        let entries: Vec<_> = elements
            .into_iter()
            .map(|node| {
                let tokens = all_tokens(dom, &node);
                Entry { node, tokens }
            })
            .collect();

        log::debug!("indexed {} entries", entries.len());

        Self { entries, options }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in construction order.
    pub fn entries(&self) -> &[Entry<D::Node>] {
        &self.entries
    }

    pub fn tokens(&self, index: usize) -> Option<&TokenSet> {
        self.entries.get(index).map(Entry::tokens)
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Filters and reorders entries for a trimmed, lower-cased `query`.
    ///
    /// Matching entries end up after all misses in their container: exact
    /// matches first, then partial matches, each group in construction
    /// order. An empty query behaves like [`Searcher::reset`].
    pub fn search(&self, dom: &mut D, query: &str) -> SearchSummary {
        if query.is_empty() {
            return self.reset(dom);
        }

        for entry in &self.entries {
            dom.set_visible(&entry.node, false);
        }

        let mut exact = Vec::new();
        let mut partial = Vec::new();
        for entry in &self.entries {
            let tier = classify(&entry.tokens, query);
            log::trace!("{:?} for {:?}", tier, query);
            match tier {
                Tier::Exact => {
                    dom.set_class(&entry.node, &self.options.marker_class, true);
                    exact.push(&entry.node);
                }
                Tier::Partial => {
                    dom.set_class(&entry.node, &self.options.marker_class, false);
                    partial.push(&entry.node);
                }
                Tier::Miss => {}
            }
        }

        for node in exact.iter().chain(partial.iter()) {
            dom.append_to_parent(node);
            dom.set_visible(node, true);
        }

        let summary = SearchSummary {
            total: self.entries.len(),
            exact: exact.len(),
            partial: partial.len(),
            hidden: self.entries.len() - exact.len() - partial.len(),
        };
        log::debug!(
            "search {:?}: {} exact, {} partial, {} hidden",
            query,
            summary.exact,
            summary.partial,
            summary.hidden
        );
        summary
    }

    /// Shows every entry unmarked, in construction order.
    pub fn reset(&self, dom: &mut D) -> SearchSummary {
        for entry in &self.entries {
            dom.set_class(&entry.node, &self.options.marker_class, false);
            dom.append_to_parent(&entry.node);
            dom.set_visible(&entry.node, true);
        }

        SearchSummary {
            total: self.entries.len(),
            ..SearchSummary::default()
        }
    }

    pub fn show_all(&self, dom: &mut D) -> SearchSummary {
        self.reset(dom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Document, NodeId};
    use pretty_assertions::assert_eq;

    const MARKER: &str = DEFAULT_MARKER_CLASS;

    struct Page {
        doc: Document,
        list: NodeId,
        entries: Vec<NodeId>,
    }

    impl Page {
        fn new(words: &[&str]) -> Self {
            let mut doc = Document::new();
            let list = doc.add_element(doc.root(), "section", &[]);
            let entries = words
                .iter()
                .map(|word| {
                    let entry = doc.add_element(list, "div", &["entry"]);
                    doc.add_text(entry, word);
                    entry
                })
                .collect();
            Self { doc, list, entries }
        }

        fn searcher(&self) -> Searcher<Document> {
            Searcher::new(&self.doc, self.entries.iter().copied())
        }

        fn order(&self) -> Vec<String> {
            self.doc
                .child_ids(self.list)
                .iter()
                .map(|&id| self.doc.text_content(id))
                .collect()
        }

        fn visible(&self) -> Vec<String> {
            self.doc
                .child_ids(self.list)
                .iter()
                .filter(|&&id| self.doc.is_visible(id))
                .map(|&id| self.doc.text_content(id))
                .collect()
        }

        fn state(&self) -> Vec<(String, bool, bool)> {
            self.doc
                .child_ids(self.list)
                .iter()
                .map(|&id| {
                    (
                        self.doc.text_content(id),
                        self.doc.is_visible(id),
                        self.doc.has_class(id, MARKER),
                    )
                })
                .collect()
        }
    }

    fn tokens(words: &[&str]) -> TokenSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Apple Pie \t"), "apple pie");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_classify_tiers() {
        let set = tokens(&["", "banana", "split"]);
        assert_eq!(classify(&set, "split"), Tier::Exact);
        assert_eq!(classify(&set, "an"), Tier::Partial);
        assert_eq!(classify(&set, "apple"), Tier::Miss);
    }

    #[test]
    fn test_empty_searcher() {
        let mut doc = Document::new();
        let searcher: Searcher<Document> = Searcher::new(&doc, Vec::new());
        assert!(searcher.is_empty());

        let summary = searcher.search(&mut doc, "anything");
        assert_eq!(summary, SearchSummary::default());
    }

    #[test]
    fn test_exact_and_nested_match() {
        let mut page = Page::new(&["Apple", "Banana split"]);
        let pine = page.doc.add_element(page.list, "div", &["entry"]);
        let span = page.doc.add_element(pine, "span", &[]);
        page.doc.add_text(span, "Pine");
        page.doc.add_text(pine, "apple");
        page.entries.push(pine);

        let searcher = page.searcher();
        let summary = searcher.search(&mut page.doc, "apple");

        assert_eq!(summary.exact, 2);
        assert_eq!(summary.hidden, 1);
        assert_eq!(
            page.state(),
            vec![
                ("Banana split".to_string(), false, false),
                ("Apple".to_string(), true, true),
                ("Pineapple".to_string(), true, true),
            ]
        );
    }

    #[test]
    fn test_partial_match() {
        let mut page = Page::new(&["Apple", "Banana split"]);
        let searcher = page.searcher();

        let summary = searcher.search(&mut page.doc, "an");

        assert_eq!(summary.partial, 1);
        assert_eq!(
            page.state(),
            vec![
                ("Apple".to_string(), false, false),
                ("Banana split".to_string(), true, false),
            ]
        );
    }

    #[test]
    fn test_exact_matches_precede_partial_matches() {
        let mut page = Page::new(&["cat", "category", "dog", "cat food", "bobcat"]);
        let searcher = page.searcher();

        searcher.search(&mut page.doc, "cat");

        assert_eq!(
            page.order(),
            vec!["dog", "cat", "cat food", "category", "bobcat"]
        );
        assert_eq!(
            page.visible(),
            vec!["cat", "cat food", "category", "bobcat"]
        );
    }

    #[test]
    fn test_partial_match_clears_stale_marker() {
        let mut page = Page::new(&["sun", "sunflower"]);
        let searcher = page.searcher();

        searcher.search(&mut page.doc, "sunflower");
        assert!(page.doc.has_class(page.entries[1], MARKER));

        searcher.search(&mut page.doc, "sun");
        assert!(page.doc.has_class(page.entries[0], MARKER));
        assert!(!page.doc.has_class(page.entries[1], MARKER));
    }

    #[test]
    fn test_reset_restores_construction_order() {
        let mut page = Page::new(&["alpha", "beta", "gamma", "delta"]);
        let searcher = page.searcher();

        searcher.search(&mut page.doc, "ta");
        assert_eq!(page.order(), vec!["alpha", "gamma", "beta", "delta"]);

        let summary = searcher.reset(&mut page.doc);
        assert_eq!(summary.visible(), 4);
        assert_eq!(page.order(), vec!["alpha", "beta", "gamma", "delta"]);
        assert_eq!(page.visible(), page.order());
    }

    #[test]
    fn test_empty_query_equals_reset() {
        let words = ["ant", "anteater", "bee"];

        let mut by_search = Page::new(&words);
        let searcher = by_search.searcher();
        searcher.search(&mut by_search.doc, "ant");
        searcher.search(&mut by_search.doc, "");

        let mut by_reset = Page::new(&words);
        let searcher = by_reset.searcher();
        searcher.search(&mut by_reset.doc, "ant");
        searcher.reset(&mut by_reset.doc);

        assert_eq!(by_search.state(), by_reset.state());
        assert!(by_search.state().iter().all(|(_, shown, marked)| *shown && !*marked));
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut page = Page::new(&["rose", "primrose", "tulip", "rosemary"]);
        let searcher = page.searcher();

        let first = searcher.search(&mut page.doc, "rose");
        let after_once = page.state();
        let second = searcher.search(&mut page.doc, "rose");

        assert_eq!(first, second);
        assert_eq!(page.state(), after_once);
    }

    #[test]
    fn test_non_entries_stay_in_place() {
        let mut page = Page::new(&["one", "two"]);
        let heading = page.doc.add_element(page.list, "h2", &[]);
        page.doc.add_text(heading, "Numbers");
        let searcher = page.searcher();

        searcher.search(&mut page.doc, "one");

        assert_eq!(page.order(), vec!["two", "Numbers", "one"]);
        assert!(page.doc.is_visible(heading));
    }

    #[test]
    fn test_custom_marker_class() {
        let mut page = Page::new(&["kiwi"]);
        let options = SearchOptions {
            marker_class: "hit".to_string(),
        };
        let searcher = Searcher::with_options(&page.doc, page.entries.clone(), options);

        searcher.search(&mut page.doc, "kiwi");

        assert!(page.doc.has_class(page.entries[0], "hit"));
        assert!(!page.doc.has_class(page.entries[0], MARKER));
    }

    #[test]
    fn test_tokens_are_fixed_at_construction() {
        let mut page = Page::new(&["plum"]);
        let searcher = page.searcher();
        page.doc.add_text(page.entries[0], "peach");
        let inner = page.doc.add_element(page.entries[0], "span", &[]);
        page.doc.add_text(inner, "peach");

        let summary = searcher.search(&mut page.doc, "peach");

        assert_eq!(summary.hidden, 1);
        assert!(searcher.tokens(0).is_some_and(|t| t.contains("plum")));
    }
}
