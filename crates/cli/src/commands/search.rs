use std::path::Path;

use anyhow::Result;

use crate::config::CliConfig;
use crate::session::{Row, Session};

pub fn run(config: &CliConfig, page: Option<&Path>, query: &str) -> Result<()> {
    let mut session = Session::open(config, page)?;
    let summary = session.search(query);

    for line in format_rows(&session.visible_rows()) {
        println!("{}", line);
    }

    eprintln!(
        "{} exact, {} partial, {} hidden",
        summary.exact, summary.partial, summary.hidden
    );
    Ok(())
}

/// Formats visible rows, prefixing exact matches with `*`.
pub fn format_rows(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let mark = if row.exact { '*' } else { ' ' };
            format!("{} {}", mark, row.label)
        })
        .collect()
}
