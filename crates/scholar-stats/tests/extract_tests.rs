//! Extraction tests against canned profile markup.
//!
//! Covers the field-by-field degradation rules: a partially redesigned page
//! should still yield whatever it can.

use chrono::NaiveDateTime;
use regex::Regex;

use scholar_stats::extract::{extract_stats, extract_stats_at};
use scholar_stats::models::{Metric, StatsRecord, TIMESTAMP_FORMAT};

const PROFILE: &str = include_str!("fixtures/profile.html");
const URL: &str = "https://scholar.google.com/citations?user=_zgKKS0AAAAJ&hl=en";

fn captured_at() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-01-31 23:59:58", TIMESTAMP_FORMAT).unwrap()
}

/// A statistics table with a header row followed by the given rows.
fn stats_page(rows: &[&[&str]]) -> String {
    let mut html = String::from(
        r#"<html><body><table id="gsc_rsb_st"><tr><th></th><th>All</th><th>Since 2019</th></tr>"#,
    );
    for row in rows {
        html.push_str("<tr>");
        for cell in *row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table></body></html>");
    html
}

fn extract(html: &str) -> StatsRecord {
    extract_stats_at(html, URL, captured_at()).expect("extraction should succeed")
}

// =============================================================================
// Full Profile
// =============================================================================

#[test]
fn test_full_profile_yields_every_field() {
    let record = extract(PROFILE);

    assert_eq!(record.citations_all.as_deref(), Some("1234"));
    assert_eq!(record.citations_since_2019.as_deref(), Some("987"));
    assert_eq!(record.h_index_all.as_deref(), Some("45"));
    assert_eq!(record.h_index_since_2019.as_deref(), Some("32"));
    assert_eq!(record.i10_index_all.as_deref(), Some("20"));
    assert_eq!(record.i10_index_since_2019.as_deref(), Some("15"));

    assert_eq!(record.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(
        record.affiliation.as_deref(),
        Some("Analytical Engine Society, University of London")
    );
    assert_eq!(
        record.interests,
        Some(vec![
            "Computing".to_string(),
            "Mathematics".to_string(),
            "Poetical Science".to_string()
        ])
    );
    assert_eq!(record.profile_url.as_deref(), Some(URL));
    assert_eq!(record.last_updated.as_deref(), Some("2025-01-31 23:59:58"));
}

#[test]
fn test_canned_rows_map_to_metrics() {
    let html = stats_page(&[&["", "1234", "987"], &["", "45", "32"], &["", "20", "15"]]);
    let record = extract(&html);

    assert_eq!(record.citations_all.as_deref(), Some("1234"));
    assert_eq!(record.citations_since_2019.as_deref(), Some("987"));
    assert_eq!(record.h_index_all.as_deref(), Some("45"));
    assert_eq!(record.h_index_since_2019.as_deref(), Some("32"));
    assert_eq!(record.i10_index_all.as_deref(), Some("20"));
    assert_eq!(record.i10_index_since_2019.as_deref(), Some("15"));
}

#[test]
fn test_populated_table_has_six_real_values() {
    let record = extract(PROFILE);
    assert_eq!(record.metric_field_count(), 6);
    for metric in Metric::ALL {
        assert_ne!(record.all_time_or_na(metric), "N/A");
        assert_ne!(record.since_2019_or_na(metric), "N/A");
    }
}

#[test]
fn test_cell_text_is_trimmed() {
    let html = stats_page(&[&["Citations", "  1,234 \n", "\t987 "]]);
    let record = extract(&html);
    assert_eq!(record.citations_all.as_deref(), Some("1,234"));
    assert_eq!(record.citations_since_2019.as_deref(), Some("987"));
}

// =============================================================================
// Degradation Rules
// =============================================================================

#[test]
fn test_missing_since_cell_becomes_na() {
    let html = stats_page(&[&["Citations", "1234"], &["h-index", "45", "32"]]);
    let record = extract(&html);

    assert_eq!(record.citations_all.as_deref(), Some("1234"));
    assert_eq!(record.citations_since_2019.as_deref(), Some("N/A"));
    assert_eq!(record.h_index_since_2019.as_deref(), Some("32"));
}

/// Quirk: a missing row drops its keys instead of writing "N/A".
#[test]
fn test_missing_row_leaves_fields_absent() {
    let html = stats_page(&[&["Citations", "1234", "987"]]);
    let record = extract(&html);

    assert_eq!(record.citations_all.as_deref(), Some("1234"));
    assert!(record.h_index_all.is_none());
    assert!(record.h_index_since_2019.is_none());
    assert!(record.i10_index_all.is_none());
    assert!(record.i10_index_since_2019.is_none());
    assert_eq!(record.metric_field_count(), 2);
}

#[test]
fn test_missing_table_still_stamps_record() {
    let html = r#"<html><body><div id="gsc_prf_in">Grace Hopper</div></body></html>"#;
    let record = extract(html);

    assert_eq!(record.metric_field_count(), 0);
    assert_eq!(record.name.as_deref(), Some("Grace Hopper"));
    assert!(record.affiliation.is_none());
    assert!(record.interests.is_none());
    assert_eq!(record.profile_url.as_deref(), Some(URL));
    assert!(record.last_updated.is_some());
}

#[test]
fn test_empty_interests_container_gives_empty_list() {
    let html = r#"<html><body><div id="gsc_prf_int"></div></body></html>"#;
    let record = extract(html);
    assert_eq!(record.interests, Some(vec![]));
}

#[test]
fn test_interest_links_without_class_are_ignored() {
    let html = r#"<div id="gsc_prf_int"><a class="gsc_prf_inta">Robotics</a><a>Other</a></div>"#;
    let record = extract(html);
    assert_eq!(record.interests, Some(vec!["Robotics".to_string()]));
}

#[test]
fn test_only_first_affiliation_line_is_used() {
    let html = r#"<div class="gsc_prf_il">MIT</div><div class="gsc_prf_il">Verified email</div>"#;
    let record = extract(html);
    assert_eq!(record.affiliation.as_deref(), Some("MIT"));
}

#[test]
fn test_garbage_input_is_not_an_error() {
    let record = extract("<<<not html at all>>>");
    assert_eq!(record.metric_field_count(), 0);
    assert!(record.name.is_none());
    assert!(record.profile_url.is_some());
}

// =============================================================================
// Timestamp
// =============================================================================

#[test]
fn test_last_updated_uses_fixed_format() {
    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
    let record = extract_stats(PROFILE, URL).unwrap();
    let stamp = record.last_updated.expect("timestamp is always set");
    assert!(pattern.is_match(&stamp), "unexpected timestamp: {stamp}");
}

#[test]
fn test_last_updated_is_taken_at_extraction() {
    let before = chrono::Local::now().naive_local() - chrono::TimeDelta::seconds(1);
    let record = extract_stats("", URL).unwrap();
    let after = chrono::Local::now().naive_local() + chrono::TimeDelta::seconds(1);

    let stamp = NaiveDateTime::parse_from_str(&record.last_updated.unwrap(), TIMESTAMP_FORMAT)
        .unwrap();
    assert!(stamp >= before && stamp <= after);
}
