mod models;
mod scrapers;

use std::io::{self, Write};

use scrapers::{ListingSource, MapsBrowserCollector, SearchRequest};
use tracing::{error, info, Level};
use tracing_subscriber;

const OUTPUT_FILE: &str = "businesses_data.json";

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🗺️  Listing Scout - Maps Business Collector");
    info!("==========================================");

    let niche = prompt("Enter the niche or search term (e.g., 'restaurants in California'): ")?;
    let scrolls = prompt("Enter number of scrolls for more results (default 5): ")?;
    let request = SearchRequest::new(&niche, &scrolls);

    info!(
        "Searching '{}' with {} scrolls...",
        request.niche, request.scroll_count
    );

    // A failed launch still falls through to the write below, so the output
    // file always exists after a run, even if it only holds [].
    let records = match MapsBrowserCollector::new() {
        Ok(collector) => {
            info!("Collecting from {}...", collector.source_name());
            collector.collect(&request).await
        }
        Err(e) => {
            error!("Error: {:#}", e);
            Vec::new()
        }
    };

    info!("✅ Collected {} businesses", records.len());

    let json = models::to_json_document(&records)?;
    tokio::fs::write(OUTPUT_FILE, json).await?;
    info!("💾 Scraped data saved to '{}'", OUTPUT_FILE);

    Ok(())
}
