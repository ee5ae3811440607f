use std::path::Path;

use anyhow::Result;

use crate::config::CliConfig;
use crate::session::Session;

pub fn run(config: &CliConfig, page: Option<&Path>) -> Result<()> {
    let session = Session::open(config, page)?;
    let searcher = session.searcher();

    for (index, entry) in searcher.entries().iter().enumerate() {
        let label = session.page().label(*entry.node());
        println!("{:>3}  {}", index + 1, label);
        println!("     {}", sorted_tokens(entry.tokens()).join(", "));
    }

    Ok(())
}

/// Non-empty tokens in sorted order.
fn sorted_tokens(tokens: &lexicon_search::TokenSet) -> Vec<&str> {
    let mut tokens: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens
}
