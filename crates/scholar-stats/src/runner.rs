//! Fetch → extract → present → persist.

use crate::client::ScholarClient;
use crate::config::Config;
use crate::error::StoreResult;
use crate::extract::extract_stats;
use crate::formatters::{ReportFormat, format_record_json, print_report};
use crate::models::StatsRecord;
use crate::store::save_record;

/// Run the pipeline once for the configured profile.
///
/// Returns `Ok(false)` when the page could not be fetched or processed; in
/// that case nothing is written. Write failures are returned as errors.
///
/// # Errors
///
/// Returns error if the record cannot be written.
pub async fn run(config: &Config) -> StoreResult<bool> {
    println!("Fetching Google Scholar statistics...");

    let Some(record) = fetch_record(config).await else {
        println!("✗ Failed to fetch Google Scholar statistics");
        return Ok(false);
    };

    present(&record, config.format);

    let path = save_record(&record, &config.output_path)?;
    println!("✓ Saved Google Scholar stats to {}", path.display());
    println!("✓ Google Scholar stats successfully fetched and saved!");

    Ok(true)
}

/// Fetch and extract, reporting failures on the console.
async fn fetch_record(config: &Config) -> Option<StatsRecord> {
    let page = match ScholarClient::new(config) {
        Ok(client) => client.fetch_profile(&config.user_id).await,
        Err(e) => Err(e),
    };

    let page = match page {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(error = %e, user = %config.user_id, "Fetch failed");
            println!("Error fetching Google Scholar profile: {e}");
            return None;
        }
    };

    match extract_stats(&page.html, &page.url) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::error!(error = %e, "Extraction failed");
            println!("Error parsing Google Scholar data: {e}");
            None
        }
    }
}

fn present(record: &StatsRecord, format: ReportFormat) {
    match format {
        ReportFormat::Text => print_report(record),
        ReportFormat::Json => match format_record_json(record) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::warn!(error = %e, "Could not render record as JSON"),
        },
    }
}
