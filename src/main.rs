use std::process::ExitCode;

use campus_market::config::MarketConfig;
use campus_market::error::Result;
use campus_market::{fixtures, views};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campus_market=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "browse failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = MarketConfig::from_env();
    let listings = match &config.catalog_path {
        Some(path) => fixtures::load_catalog_file(path)?,
        None => fixtures::mock_catalog(),
    };

    let mut spec = config.initial_filter();
    spec.search_text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let viewer = config.viewer();
    info!(
        listings = listings.len(),
        campus = viewer.campus.as_deref().unwrap_or("anonymous"),
        search = %spec.search_text,
        "browsing catalog"
    );

    let page = views::browse::page(&listings, &spec, &viewer, chrono::Utc::now());
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
