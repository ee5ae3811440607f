pub fn run() {
    println!("lexicon {}", env!("CARGO_PKG_VERSION"));
}
