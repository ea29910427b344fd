#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stock-report/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! LaTeX stock reports from quote statistics and news headlines.
//!
//! This crate re-exports the core types and provider implementations and
//! provides a [`ReportAssembler`] that turns a symbol list into a finished
//! document, plus the file-system pieces that feed it.
//!
//! # Features
//!
//! - `yahoo` - Yahoo Finance quote and news fetchers
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use report::{ReportAssembler, ReportConfig, ReportPaths, YahooProvider};
//!
//! #[tokio::main]
//! async fn main() -> report::Result<()> {
//!     let yahoo = Arc::new(YahooProvider::new()?);
//!     let assembler = ReportAssembler::new(yahoo.clone(), yahoo)
//!         .with_config(ReportConfig::new());
//!
//!     report::generate_report(&assembler, &ReportPaths::under(".")).await?;
//!     Ok(())
//! }
//! ```

use tracing::info;

// Core types and traits
pub use report_core::*;

// Providers
#[cfg(feature = "yahoo")]
pub use report_yahoo::YahooProvider;

mod assembler;
mod config;
mod files;
mod render;

pub use assembler::ReportAssembler;
pub use config::{ErrorPolicy, ReportConfig};
pub use files::{
    DEFAULT_INPUT, DEFAULT_OUTPUT, FOOTER_TEMPLATE, HEADER_TEMPLATE, ReportPaths, Templates,
    parse_symbol_list, read_symbols, write_report,
};
pub use render::{NO_NEWS, TABLE_CLOSE, render_news_section, render_quote_row};

/// Reads the inputs named by `paths`, assembles the report and writes it.
///
/// The output file is only touched after the whole document has been built.
pub async fn generate_report(assembler: &ReportAssembler, paths: &ReportPaths) -> Result<()> {
    let symbols = read_symbols(&paths.input).await?;
    let templates = Templates::load(paths).await?;

    let document = assembler
        .assemble(&symbols, &templates.header, &templates.footer)
        .await?;

    write_report(&paths.output, &document).await?;
    info!(symbols = symbols.len(), "Finished headlines");
    Ok(())
}
