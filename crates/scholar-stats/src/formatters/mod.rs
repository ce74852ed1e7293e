//! Output formatters for the console report and JSON.

mod json;
mod text;

pub use self::json::*;
pub use text::*;

/// How the record is shown on the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Aligned text report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
