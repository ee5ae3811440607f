use std::path::{Path, PathBuf};

use lexicon_search::DEFAULT_MARKER_CLASS;

pub const DEFAULT_ENTRY_CLASS: &str = "entry";

pub const DEFAULT_CONFIG: &str = "# Page document (JSON) with the word entries\n\
# page = ~/words.json\n\
# Class that marks an element as a searchable entry\n\
entry_class = entry\n\
# Class applied to entries that match a query exactly\n\
marker_class = exact-match\n";

/// Returns the path to the config file
pub fn config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir().map(|p| p.join("lexicon").join("config.txt"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        dirs::home_dir().map(|p| p.join(".config").join("lexicon").join("config.txt"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub page: Option<PathBuf>,
    pub entry_class: String,
    pub marker_class: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            page: None,
            entry_class: DEFAULT_ENTRY_CLASS.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
        }
    }
}

impl CliConfig {
    /// Loads the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_contents(&contents),
            Err(e) => {
                log::debug!("using default config ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parses `key = value` lines. Unknown keys and empty values are ignored.
    pub fn from_contents(contents: &str) -> Self {
        let mut config = Self::default();

        for line in contents.lines() {
            let trimmed = line.trim();

            // Skip comments and empty lines
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let Some(value) = parse_string_value(value) else {
                continue;
            };

            match key {
                "page" => config.page = Some(expand_home(&value)),
                "entry_class" => config.entry_class = value,
                "marker_class" => config.marker_class = value,
                _ => {}
            }
        }

        config
    }
}

fn parse_string_value(value: &str) -> Option<String> {
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn expand_home(value: &str) -> PathBuf {
    if let Some(rest) = value.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    Path::new(value).to_path_buf()
}
