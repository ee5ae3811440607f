//! Word-entry search for Lexicon.
//!
//! Indexes the text of a fixed set of elements once, then shows, hides and
//! reorders them by match quality on every query.

mod dom;
mod searcher;
mod tokens;
mod tree;

pub use dom::Dom;
pub use searcher::{
    DEFAULT_MARKER_CLASS, Entry, SearchOptions, SearchSummary, Searcher, Tier, classify,
    normalize_query,
};
pub use tokens::{TokenSet, all_tokens, first_text_content, split_words};
pub use tree::{Document, NodeId, NodeKind};
