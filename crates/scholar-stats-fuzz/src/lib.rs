//! Fuzzing library for scholar-stats.
//!
//! This crate provides fuzzing targets for the profile page extractor and
//! the YAML record reader.
//!
//! # Usage
//!
//! ```bash
//! cd crates/scholar-stats-fuzz
//! cargo +nightly fuzz run fuzz_extract_html -- -max_total_time=60
//! ```

pub use scholar_stats::{extract, models};
