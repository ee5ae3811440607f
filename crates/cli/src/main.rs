use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod page;
mod session;
mod text_input;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "lexicon")]
#[command(about = "Live word-entry search", long_about = None)]
#[command(version)]
struct Cli {
    /// Page document (JSON) to search instead of the configured one
    #[arg(long, global = true)]
    page: Option<PathBuf>,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Show version information
    #[command(name = "-version")]
    Version,

    /// Show help and available actions
    #[command(name = "-help")]
    Help,

    /// Interactive search over the page entries
    #[command(name = "-tui")]
    Tui,

    /// Print the entries left visible by a query
    #[command(name = "-search")]
    Search {
        /// Query text; trimmed and lower-cased before searching
        query: String,
    },

    /// Print the tokens indexed for each entry
    #[command(name = "-tokens")]
    Tokens,

    /// Display current configuration
    #[command(name = "-show-config")]
    ShowConfig,

    /// Validate configuration file
    #[command(name = "-validate-config")]
    ValidateConfig,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = CliConfig::load();
    let page = cli.page.as_deref();

    let result = match cli.action {
        Some(Action::Version) => {
            commands::version::run();
            Ok(())
        }
        Some(Action::Help) => {
            commands::help::run();
            Ok(())
        }
        Some(Action::Search { query }) => commands::search::run(&config, page, &query),
        Some(Action::Tokens) => commands::tokens::run(&config, page),
        Some(Action::ShowConfig) => {
            commands::show_config::run();
            Ok(())
        }
        Some(Action::ValidateConfig) => {
            commands::validate_config::run();
            Ok(())
        }
        // No subcommand: start searching
        Some(Action::Tui) | None => commands::tui::run(&config, page),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
