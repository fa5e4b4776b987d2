use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process;
use wikidot_html_engine::Converter;

/// Reads all of stdin and returns the HTML.
///
/// Nothing is written to stdout until the whole document has converted, so
/// a fault never leaves partial output behind.
fn run() -> Result<String> {
    let html = Converter::default()
        .convert_reader(io::stdin().lock())
        .context("Conversion failed")?;
    log::debug!("converted {} bytes of HTML", html.len());
    Ok(html)
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let html = match run() {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(html.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("Error: Failed to write output: {e}");
        process::exit(1);
    }
}
