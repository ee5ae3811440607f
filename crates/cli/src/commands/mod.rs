pub mod help;
pub mod search;
pub mod show_config;
pub mod tokens;
pub mod tui;
pub mod validate_config;
pub mod version;
