use anyhow::{Context, Result};
use lexicon_search::DEFAULT_MARKER_CLASS;
use serde::Deserialize;

const DEFAULT_ENTRY_SELECTOR: &str = "div[class=entry]";
const DEFAULT_SEARCH_INPUT_ID: &str = "search";
const DEFAULT_DISPLAY: &str = "flex";
const DEFAULT_EVENT: &str = "keyup";

/// How the widget finds its elements on the page.
///
/// Every field is optional in JSON; missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// CSS selector resolving the entries, in document order.
    pub entry_selector: String,
    /// Id of the `<input>` element holding the query.
    pub search_input_id: String,
    pub marker_class: String,
    /// `display` value written to visible entries.
    pub display: String,
    /// Input event that triggers a search.
    pub event: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            entry_selector: DEFAULT_ENTRY_SELECTOR.to_string(),
            search_input_id: DEFAULT_SEARCH_INPUT_ID.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            display: DEFAULT_DISPLAY.to_string(),
            event: DEFAULT_EVENT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_str(json).context("invalid lexicon config")?;
        if config.display.trim().is_empty() || config.display.trim() == "none" {
            anyhow::bail!("display must be a visible CSS display value");
        }
        Ok(config)
    }
}
