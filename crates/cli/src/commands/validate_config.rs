use crate::config::{CliConfig, config_path};
use crate::page::Page;

const VALID_KEYS: &[&str] = &["page", "entry_class", "marker_class"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks config syntax and, when a page is configured, that it loads.
pub fn validate_contents(contents: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (line_num, line) in contents.lines().enumerate() {
        let line_num = line_num + 1;
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            report.errors.push(format!(
                "Line {}: Invalid syntax. Expected 'key = value'",
                line_num
            ));
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if !VALID_KEYS.contains(&key) {
            report
                .warnings
                .push(format!("Line {}: Unknown key '{}'", line_num, key));
            continue;
        }

        if value.is_empty() {
            report.warnings.push(format!(
                "Line {}: Empty value for '{}' (default is used)",
                line_num, key
            ));
            continue;
        }

        if key != "page" && value.split_whitespace().count() > 1 {
            report.errors.push(format!(
                "Line {}: {} must be a single class name",
                line_num, key
            ));
        }
    }

    let config = CliConfig::from_contents(contents);
    if let Some(path) = config.page.as_deref() {
        match Page::load(Some(path), &config.entry_class) {
            Ok(page) if page.entries.is_empty() => report.warnings.push(format!(
                "Page {} has no elements with class '{}'",
                path.display(),
                config.entry_class
            )),
            Ok(_) => {}
            Err(e) => report.errors.push(format!("{:#}", e)),
        }
    }

    report
}

pub fn run() {
    let path = match config_path() {
        Some(p) => p,
        None => {
            eprintln!("Could not determine config directory");
            std::process::exit(1);
        }
    };

    println!("Config file: {}", path.display());

    if !path.exists() {
        println!("Status: File does not exist (using defaults)");
        println!("Result: Valid");
        return;
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            println!("Status: Failed to read file");
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let ValidationReport { errors, warnings } = validate_contents(&contents);

    if errors.is_empty() && warnings.is_empty() {
        println!("Status: Valid");
        return;
    }

    if !errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &errors {
            println!("  {}", error);
        }
    }

    if !warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &warnings {
            println!("  {}", warning);
        }
    }

    println!();
    if errors.is_empty() {
        println!("Result: Valid (with warnings)");
    } else {
        println!("Result: Invalid");
        std::process::exit(1);
    }
}
