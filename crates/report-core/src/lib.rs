#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stock-report/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types, parsers and formatters for the stock report pipeline.
//!
//! This crate holds everything in the pipeline that is pure logic:
//!
//! - [`QuoteProvider`](provider::QuoteProvider) / [`NewsProvider`](provider::NewsProvider) - Raw fetcher traits
//! - [`parse_quotes`](quote::parse_quotes) - CSV quote response to [`QuoteRecord`]s
//! - [`percent_change`](percent::percent_change) - Derived percent-change column
//! - [`parse_headlines`](headline::parse_headlines) - Marker-based headline extraction
//! - [`escape_latex`](escape::escape_latex) / [`truncate`](truncate::truncate) - Text and number formatting

/// LaTeX escaping for free-form text.
pub mod escape;
/// Error types for fetching, parsing and formatting.
pub mod error;
/// Headline extraction from news pages.
pub mod headline;
/// Percent-change derivation and rendering.
pub mod percent;
/// Provider traits for fetching raw quote and news payloads.
pub mod provider;
/// Quote response parsing.
pub mod quote;
/// Truncating number formatting.
pub mod truncate;
/// Core data types (Symbol, QuoteRecord, HeadlineRecord, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ReportError, Result};
pub use escape::escape_latex;
pub use headline::{DEFAULT_HEADLINE_MARKER, parse_headline_items, parse_headlines};
pub use percent::percent_change;
pub use provider::{DataProvider, NewsProvider, QuoteProvider};
pub use quote::{parse_quote_rows, parse_quotes};
pub use truncate::truncate;
pub use types::{HeadlineRecord, NOT_AVAILABLE, QuoteField, QuoteRecord, Symbol};
