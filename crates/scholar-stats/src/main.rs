//! Google Scholar Stats - Entry Point
//!
//! With no arguments, fetches the default profile into `data/scholar_stats.yml`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_stats::config::{Config, api};
use scholar_stats::formatters::ReportFormat;
use scholar_stats::runner;

#[derive(Parser, Debug)]
#[command(name = "scholar-stats")]
#[command(about = "Fetch Google Scholar citation statistics and save them as YAML")]
#[command(version)]
struct Cli {
    /// Google Scholar profile identifier (the `user=` query parameter)
    #[arg(long, default_value = api::DEFAULT_USER_ID)]
    user: String,

    /// Output YAML file
    #[arg(long, default_value = api::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Console output format
    #[arg(long, default_value = "text")]
    format: ReportFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        user = %cli.user,
        output = %cli.output.display(),
        "Starting Google Scholar stats fetch"
    );

    let config = Config::new(cli.user).with_output_path(cli.output).with_format(cli.format);

    if runner::run(&config).await? { Ok(ExitCode::SUCCESS) } else { Ok(ExitCode::FAILURE) }
}
