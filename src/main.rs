// src/main.rs
use std::io;

use bundle_tracker::{logf, nav, scrape};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    logf!("fetching bundle page");
    let mut catalog = scrape::fetch_catalog()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    nav::run(&mut catalog, &mut input, &mut out)?;
    Ok(())
}
