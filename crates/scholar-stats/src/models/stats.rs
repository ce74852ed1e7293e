//! Citation statistics record extracted from a Scholar profile.

use serde::{Deserialize, Serialize};

/// Placeholder for a value Scholar did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format of `last_updated`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A metric reported in the profile's statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Total citation count.
    Citations,
    /// h-index.
    HIndex,
    /// i10-index.
    I10Index,
}

impl Metric {
    /// All metrics, in table order.
    pub const ALL: [Self; 3] = [Self::Citations, Self::HIndex, Self::I10Index];

    /// Row of the statistics table holding this metric.
    ///
    /// Row 0 is the column header. This is the only place that knows the
    /// table layout.
    #[must_use]
    pub const fn row_index(self) -> usize {
        match self {
            Self::Citations => 1,
            Self::HIndex => 2,
            Self::I10Index => 3,
        }
    }

    /// Prefix of the record keys for this metric.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Citations => "citations",
            Self::HIndex => "h_index",
            Self::I10Index => "i10_index",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Citations => "Citations",
            Self::HIndex => "h-index",
            Self::I10Index => "i10-index",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The two values of one statistics row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricPair {
    /// All-time value.
    pub all: String,
    /// Value counting only citations since 2019.
    pub since_2019: String,
}

impl MetricPair {
    /// Build a pair from the row's cell texts, substituting "N/A" for a missing since-2019 cell.
    #[must_use]
    pub fn new(all: impl Into<String>, since_2019: Option<String>) -> Self {
        Self {
            all: all.into(),
            since_2019: since_2019.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// Statistics captured from one profile page.
///
/// Field order is the order keys are written to YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Total citations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations_all: Option<String>,

    /// Citations since 2019.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations_since_2019: Option<String>,

    /// h-index over all time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_index_all: Option<String>,

    /// h-index since 2019.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_index_since_2019: Option<String>,

    /// i10-index over all time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i10_index_all: Option<String>,

    /// i10-index since 2019.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i10_index_since_2019: Option<String>,

    /// Researcher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Affiliation line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,

    /// Research interests. `Some(vec![])` when the section exists but lists nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,

    /// Page the record was extracted from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,

    /// Local capture time, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl StatsRecord {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Store both values of a metric.
    pub fn set_metric(&mut self, metric: Metric, pair: MetricPair) {
        let (all, since) = self.metric_slots(metric);
        *all = Some(pair.all);
        *since = Some(pair.since_2019);
    }

    /// Both values of a metric, if the row was found.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<MetricPair> {
        let (all, since) = match metric {
            Metric::Citations => (&self.citations_all, &self.citations_since_2019),
            Metric::HIndex => (&self.h_index_all, &self.h_index_since_2019),
            Metric::I10Index => (&self.i10_index_all, &self.i10_index_since_2019),
        };
        Some(MetricPair { all: all.clone()?, since_2019: since.clone()? })
    }

    /// All-time value, or "N/A".
    #[must_use]
    pub fn all_time_or_na(&self, metric: Metric) -> &str {
        let value = match metric {
            Metric::Citations => &self.citations_all,
            Metric::HIndex => &self.h_index_all,
            Metric::I10Index => &self.i10_index_all,
        };
        value.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Since-2019 value, or "N/A".
    #[must_use]
    pub fn since_2019_or_na(&self, metric: Metric) -> &str {
        let value = match metric {
            Metric::Citations => &self.citations_since_2019,
            Metric::HIndex => &self.h_index_since_2019,
            Metric::I10Index => &self.i10_index_since_2019,
        };
        value.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Number of metric fields present (0 to 6).
    #[must_use]
    pub fn metric_field_count(&self) -> usize {
        [
            &self.citations_all,
            &self.citations_since_2019,
            &self.h_index_all,
            &self.h_index_since_2019,
            &self.i10_index_all,
            &self.i10_index_since_2019,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }

    fn metric_slots(&mut self, metric: Metric) -> (&mut Option<String>, &mut Option<String>) {
        match metric {
            Metric::Citations => (&mut self.citations_all, &mut self.citations_since_2019),
            Metric::HIndex => (&mut self.h_index_all, &mut self.h_index_since_2019),
            Metric::I10Index => (&mut self.i10_index_all, &mut self.i10_index_since_2019),
        }
    }
}
