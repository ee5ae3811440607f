pub fn run() {
    println!("Available commands:");
    println!();
    println!("  -tui              Interactive search over the page entries");
    println!("  -search <QUERY>   Print the entries left visible by a query");
    println!("  -tokens           Print the tokens indexed for each entry");
    println!("  -version          Show version information");
    println!("  -help             Show this help message");
    println!("  -show-config      Display current configuration");
    println!("  -validate-config  Validate configuration file");
    println!();
    println!("Options:");
    println!("  --page <PATH>     Page document (JSON) to search instead of the configured one");
}
