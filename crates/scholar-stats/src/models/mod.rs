//! Data models for Google Scholar profile statistics.
//!
//! Every field of the record is optional and skipped when absent, so a
//! serialized record only carries what the page actually showed.

mod stats;

pub use stats::{Metric, MetricPair, NOT_AVAILABLE, StatsRecord, TIMESTAMP_FORMAT};
