use crate::config::{CliConfig, DEFAULT_CONFIG, config_path};

pub fn run() {
    let path = match config_path() {
        Some(p) => p,
        None => {
            eprintln!("Could not determine config directory");
            return;
        }
    };

    if !path.exists() {
        println!("# Config file: {} (not created yet)", path.display());
        println!("# Using default configuration");
        println!();
        print!("{}", DEFAULT_CONFIG);
        return;
    }

    println!("# Config file: {}", path.display());
    println!();

    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            if contents.trim().is_empty() {
                println!("# (empty file - using defaults)");
                println!();
                print!("{}", DEFAULT_CONFIG);
            } else {
                print!("{}", contents);
                if !contents.ends_with('\n') {
                    println!();
                }
            }
            println!();
            print_effective(&CliConfig::from_contents(&contents));
        }
        Err(e) => {
            eprintln!("Failed to read config file: {}", e);
        }
    }
}

fn print_effective(config: &CliConfig) {
    println!("# Effective values:");
    match &config.page {
        Some(page) => println!("# page = {}", page.display()),
        None => println!("# page = (built-in sample)"),
    }
    println!("# entry_class = {}", config.entry_class);
    println!("# marker_class = {}", config.marker_class);
}
