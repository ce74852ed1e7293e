//! Configuration for the Google Scholar stats fetcher.

use std::path::PathBuf;

use crate::formatters::ReportFormat;

/// Upstream endpoint constants.
pub mod api {
    /// Profile endpoint on Google Scholar.
    pub const BASE_URL: &str = "https://scholar.google.com/citations";

    /// Interface language requested from Scholar. Labels in the stats table depend on it.
    pub const LOCALE: &str = "en";

    /// Browser identity sent with every request.
    ///
    /// Scholar rejects requests from clients that do not look like a browser.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

    /// Profile fetched when no identifier is given.
    pub const DEFAULT_USER_ID: &str = "_zgKKS0AAAAJ";

    /// Where the record is written, relative to the working directory.
    pub const DEFAULT_OUTPUT_PATH: &str = "data/scholar_stats.yml";
}

/// CSS selectors for the profile page markup.
pub mod selectors {
    /// Citation statistics table.
    pub const STATS_TABLE: &str = "table#gsc_rsb_st";

    /// Rows of the statistics table (row 0 is the header).
    pub const TABLE_ROW: &str = "tr";

    /// Cells of a statistics row.
    pub const TABLE_CELL: &str = "td";

    /// Researcher name.
    pub const NAME: &str = "div#gsc_prf_in";

    /// Affiliation line. Only the first match is used.
    pub const AFFILIATION: &str = "div.gsc_prf_il";

    /// Container of the research interest links.
    pub const INTERESTS: &str = "div#gsc_prf_int";

    /// A single research interest link.
    pub const INTEREST_LINK: &str = "a.gsc_prf_inta";
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scholar profile identifier (the `user` query parameter).
    pub user_id: String,

    /// Profile endpoint (overridden in tests to point at a mock server).
    pub base_url: String,

    /// Destination of the YAML record.
    pub output_path: PathBuf,

    /// Console rendering of the record.
    pub format: ReportFormat,
}

impl Config {
    /// Create a configuration for the given profile, writing to the default path.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            base_url: api::BASE_URL.to_string(),
            output_path: PathBuf::from(api::DEFAULT_OUTPUT_PATH),
            format: ReportFormat::Text,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str, output_path: impl Into<PathBuf>) -> Self {
        Self {
            user_id: api::DEFAULT_USER_ID.to_string(),
            base_url: format!("{}/citations", base_url.trim_end_matches('/')),
            output_path: output_path.into(),
            format: ReportFormat::Text,
        }
    }

    /// Override the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Override the console format.
    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::DEFAULT_USER_ID)
    }
}
