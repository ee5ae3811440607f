use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::dom::Dom;

/// Lower-cased word fragments found in an element's subtree.
pub type TokenSet = HashSet<String>;

// ASCII word characters only, matching the `\W` class of browser regexes.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_]+").unwrap_or_else(|e| panic!("invalid separator pattern: {e}"))
});

/// Splits `text` on runs of non-word characters.
///
/// Empty pieces at the edges are kept, so `"-apple-"` yields `"", "apple", ""`.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    NON_WORD.split(text)
}

/// Value of the first direct text child of `node`, lower-cased.
///
/// Any further text children are ignored. Returns an empty string when the
/// node has no text child.
pub fn first_text_content<D: Dom>(dom: &D, node: &D::Node) -> String {
    dom.children(node)
        .iter()
        .find_map(|child| dom.text(child))
        .map(|text| text.to_lowercase())
        .unwrap_or_default()
}

/// Collects the tokens of `node` and every descendant.
///
/// Each node contributes the words of its own first text child, so text
/// wrapped in nested markup is still searchable.
pub fn all_tokens<D: Dom>(dom: &D, node: &D::Node) -> TokenSet {
    let text = first_text_content(dom, node);
    let mut tokens: TokenSet = split_words(&text).map(str::to_owned).collect();

    for child in dom.children(node) {
        tokens.extend(all_tokens(dom, &child));
    }

    tokens
}
