pub fn run() -> anyhow::Result<()> {
    println!("passage {}", env!("CARGO_PKG_VERSION"));
    println!("Two-stage TF-IDF passage retrieval");
    Ok(())
}
