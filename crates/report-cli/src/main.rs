//! stock-report CLI - LaTeX report of quotes and headlines for a symbol list.
//!
//! Reads `<data-dir>/<INPUT>`, wraps the generated table and news sections in
//! `<template-dir>/file_start.tex` and `<template-dir>/file_end.tex`, and writes
//! `<output-dir>/<output-name>`. Exits with status 1 if anything fails, in which
//! case no report is written.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use report::{
    DEFAULT_INPUT, DEFAULT_OUTPUT, ErrorPolicy, ReportAssembler, ReportConfig, ReportPaths,
    YahooProvider, generate_report,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "stock-report")]
#[command(about = "Build a LaTeX report of quotes and news headlines for a list of symbols")]
struct Cli {
    /// Symbol list file name, resolved inside the data directory
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory holding the symbol list
    #[arg(long, default_value = "DATA")]
    data_dir: PathBuf,

    /// Directory holding file_start.tex and file_end.tex
    #[arg(long, default_value = "CODE")]
    template_dir: PathBuf,

    /// Directory the report is written to
    #[arg(long, default_value = "OUTPUT")]
    output_dir: PathBuf,

    /// Report file name inside the output directory
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output_name: PathBuf,

    /// Day of headlines to fetch (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Number of news pages fetched at once
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// What to do when a symbol's quote row or news page fails
    #[arg(long, value_enum, default_value_t = Policy::Abort)]
    on_error: Policy,

    /// What to do with a headline item that cannot be parsed
    #[arg(long, value_enum, default_value_t = Policy::Skip)]
    on_malformed_headline: Policy,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Minimum delay between HTTP requests in milliseconds
    #[arg(long, default_value_t = 250)]
    rate_limit_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Fail the whole report
    Abort,
    /// Warn and continue with a placeholder
    Skip,
}

impl From<Policy> for ErrorPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Abort => Self::Abort,
            Policy::Skip => Self::Skip,
        }
    }
}

impl Cli {
    fn paths(&self) -> ReportPaths {
        ReportPaths {
            input: self.data_dir.join(&self.input),
            template_dir: self.template_dir.clone(),
            output: self.output_dir.join(&self.output_name),
        }
    }

    fn config(&self) -> ReportConfig {
        let config = ReportConfig::new()
            .with_concurrency(self.concurrency)
            .with_error_policy(self.on_error.into())
            .with_malformed_headlines(self.on_malformed_headline.into());
        match self.date {
            Some(date) => config.with_news_date(date),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => {
            println!("Finished headlines.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("stock-report: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    debug!(?cli, "Starting");

    let yahoo = Arc::new(
        YahooProvider::with_options(
            Duration::from_secs(cli.timeout_secs),
            Duration::from_millis(cli.rate_limit_ms),
        )
        .context("failed to build HTTP client")?,
    );
    let assembler = ReportAssembler::new(yahoo.clone(), yahoo).with_config(cli.config());

    let paths = cli.paths();
    generate_report(&assembler, &paths).await.with_context(|| {
        format!(
            "failed to build report from {} into {}",
            paths.input.display(),
            paths.output.display()
        )
    })
}
