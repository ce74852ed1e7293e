//! Google Scholar Stats
//!
//! Fetches a researcher's public citation metrics from their Google Scholar
//! profile and saves them as a YAML record for static-site generators.
//!
//! # Pipeline
//!
//! - **Fetch**: one GET against the profile page with a browser `User-Agent`
//! - **Extract**: citations, h-index and i10-index (all-time and since 2019),
//!   name, affiliation and interests; missing sections are skipped
//! - **Present**: aligned console report (or JSON)
//! - **Persist**: block-style YAML, keys in a fixed order
//!
//! # Example
//!
//! ```no_run
//! use scholar_stats::{config::Config, runner};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new("_zgKKS0AAAAJ");
//!     let saved = runner::run(&config).await?;
//!     std::process::exit(if saved { 0 } else { 1 });
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatters;
pub mod models;
pub mod runner;
pub mod store;

pub use client::ScholarClient;
pub use config::Config;
pub use error::{ExtractError, FetchError, StoreError};
pub use models::StatsRecord;
