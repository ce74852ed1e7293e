//! Extraction of citation statistics from Scholar profile markup.
//!
//! Missing structure degrades field by field:
//! - no statistics table: no metric fields
//! - a missing row (or one with fewer than two cells): both fields of that metric absent
//! - a missing since-2019 cell: that field is "N/A"
//!
//! A missing row drops its keys while a missing cell keeps its key as "N/A".
//! Downstream templates see absent keys for missing rows; keep the two cases apart.

use chrono::{Local, NaiveDateTime};
use scraper::{ElementRef, Html, Selector};

use crate::config::selectors;
use crate::error::{ExtractError, ExtractResult};
use crate::models::{Metric, MetricPair, StatsRecord, TIMESTAMP_FORMAT};

/// Compiled selectors for the profile page.
struct ProfileSelectors {
    stats_table: Selector,
    row: Selector,
    cell: Selector,
    name: Selector,
    affiliation: Selector,
    interests: Selector,
    interest_link: Selector,
}

impl ProfileSelectors {
    fn new() -> ExtractResult<Self> {
        Ok(Self {
            stats_table: compile(selectors::STATS_TABLE)?,
            row: compile(selectors::TABLE_ROW)?,
            cell: compile(selectors::TABLE_CELL)?,
            name: compile(selectors::NAME)?,
            affiliation: compile(selectors::AFFILIATION)?,
            interests: compile(selectors::INTERESTS)?,
            interest_link: compile(selectors::INTEREST_LINK)?,
        })
    }
}

fn compile(source: &str) -> ExtractResult<Selector> {
    Selector::parse(source).map_err(|e| ExtractError::selector(source, e.to_string()))
}

/// Extract a statistics record, stamped with the current local time.
///
/// # Errors
///
/// Returns error if the page cannot be processed at all. Missing sections
/// are not errors.
pub fn extract_stats(html: &str, profile_url: &str) -> ExtractResult<StatsRecord> {
    extract_stats_at(html, profile_url, Local::now().naive_local())
}

/// Extract a statistics record with an explicit capture time.
///
/// # Errors
///
/// Returns error if the page cannot be processed at all.
pub fn extract_stats_at(
    html: &str,
    profile_url: &str,
    captured_at: NaiveDateTime,
) -> ExtractResult<StatsRecord> {
    let sel = ProfileSelectors::new()?;
    let document = Html::parse_document(html);
    let mut record = StatsRecord::default();

    match document.select(&sel.stats_table).next() {
        Some(table) => {
            let rows: Vec<ElementRef<'_>> = table.select(&sel.row).collect();
            for metric in Metric::ALL {
                match rows.get(metric.row_index()).and_then(|row| read_row(*row, &sel.cell)) {
                    Some(pair) => record.set_metric(metric, pair),
                    None => tracing::debug!(%metric, "Statistics row missing"),
                }
            }
        }
        None => tracing::debug!("Statistics table not found"),
    }

    record.name = document.select(&sel.name).next().map(element_text);
    record.affiliation = document.select(&sel.affiliation).next().map(element_text);
    record.interests = document
        .select(&sel.interests)
        .next()
        .map(|container| container.select(&sel.interest_link).map(element_text).collect());

    record.profile_url = Some(profile_url.to_string());
    record.last_updated = Some(captured_at.format(TIMESTAMP_FORMAT).to_string());

    tracing::debug!(
        metrics = record.metric_field_count(),
        has_name = record.name.is_some(),
        "Extracted profile statistics"
    );

    Ok(record)
}

/// Cells 1 and 2 of a row. Cell 0 is the row label.
fn read_row(row: ElementRef<'_>, cell: &Selector) -> Option<MetricPair> {
    let cells: Vec<ElementRef<'_>> = row.select(cell).collect();
    if cells.len() < 2 {
        return None;
    }
    Some(MetricPair::new(element_text(cells[1]), cells.get(2).map(|c| element_text(*c))))
}

/// All descendant text, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
