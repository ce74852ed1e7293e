//! Aligned plain-text report.

use std::fmt::Write as _;

use crate::models::{Metric, StatsRecord};

/// Report width in columns.
const WIDTH: usize = 60;

/// Shown instead of a report when the record is empty.
pub const EMPTY_NOTICE: &str = "No statistics available.";

/// Render a record as the console report.
#[must_use]
pub fn render_report(record: &StatsRecord) -> String {
    if record.is_empty() {
        return format!("{EMPTY_NOTICE}\n");
    }

    let rule = "=".repeat(WIDTH);
    let mut output = format!("\n{rule}\nGOOGLE SCHOLAR STATISTICS\n{rule}\n");

    if let Some(name) = &record.name {
        let _ = writeln!(output, "\nName: {name}");
    }
    if let Some(affiliation) = &record.affiliation {
        let _ = writeln!(output, "Affiliation: {affiliation}");
    }

    let _ = writeln!(output, "\n{:<20} {:<15} {:<15}", "Metric", "All Time", "Since 2019");
    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');

    for metric in Metric::ALL {
        let _ = writeln!(
            output,
            "{:<20} {:<15} {:<15}",
            metric.label(),
            record.all_time_or_na(metric),
            record.since_2019_or_na(metric)
        );
    }

    if let Some(interests) = record.interests.as_ref().filter(|i| !i.is_empty()) {
        let _ = writeln!(output, "\nResearch Interests: {}", interests.join(", "));
    }

    if let Some(updated) = &record.last_updated {
        let _ = writeln!(output, "\nLast Updated: {updated}");
    }

    let _ = writeln!(output, "{rule}\n");
    output
}

/// Print the report to stdout.
pub fn print_report(record: &StatsRecord) {
    print!("{}", render_report(record));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_prints_notice_only() {
        assert_eq!(render_report(&StatsRecord::default()), "No statistics available.\n");
    }

    #[test]
    fn test_metric_lines_are_aligned() {
        let record = StatsRecord {
            citations_all: Some("1234".to_string()),
            citations_since_2019: Some("987".to_string()),
            ..Default::default()
        };
        let report = render_report(&record);
        assert!(report.contains(&format!("{:<20} {:<15} {:<15}\n", "Citations", "1234", "987")));
        assert!(report.contains(&format!("{:<20} {:<15} {:<15}\n", "h-index", "N/A", "N/A")));
    }
}
