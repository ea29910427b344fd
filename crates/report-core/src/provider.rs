//! Provider traits for fetching raw report inputs.
//!
//! This module defines the core provider traits:
//!
//! - [`DataProvider`] - Base trait for all providers
//! - [`QuoteProvider`] - Batched CSV quote statistics
//! - [`NewsProvider`] - Per-symbol news pages
//!
//! Providers only move bytes: they return the raw response text and leave
//! parsing to [`parse_quote_rows`](crate::quote::parse_quote_rows) and
//! [`parse_headline_items`](crate::headline::parse_headline_items).

use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{QuoteField, Symbol},
};

/// Base trait for all data providers.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "Yahoo Finance").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;
}

/// Provider for batched quote statistics.
#[async_trait]
pub trait QuoteProvider: DataProvider {
    /// Fetches quote statistics for all `symbols` in one request.
    ///
    /// Returns the CSV body: one row per symbol, in request order, with one
    /// value per entry of `fields`.
    async fn fetch_quotes(&self, symbols: &[Symbol], fields: &[QuoteField]) -> Result<String>;
}

/// Provider for per-symbol news pages.
#[async_trait]
pub trait NewsProvider: DataProvider {
    /// Fetches the news page listing headlines for `symbol` on `date`.
    async fn fetch_news(&self, symbol: &Symbol, date: NaiveDate) -> Result<String>;
}
