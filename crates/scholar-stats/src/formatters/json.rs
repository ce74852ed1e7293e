//! JSON rendering of a statistics record.

use crate::models::StatsRecord;

/// Render a record as pretty-printed JSON, keys in record order.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_record_json(record: &StatsRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}
