#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stock-report/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Yahoo Finance quote and news fetchers.
//!
//! This crate provides a Yahoo Finance provider that implements the
//! [`DataProvider`], [`QuoteProvider`], and [`NewsProvider`] traits from
//! `report-core`.
//!
//! # Features
//!
//! - Batched CSV quote download for many symbols in one request
//! - Per-symbol headline pages for a given date
//! - Built-in rate limiting between requests
//! - Request timeout so a hung connection cannot stall the report
//!
//! # Example
//!
//! ```no_run
//! use report_yahoo::YahooProvider;
//! use report_core::{QuoteField, QuoteProvider, Symbol};
//!
//! # async fn example() -> report_core::Result<()> {
//! let provider = YahooProvider::new()?;
//! let symbols = vec![Symbol::new("IBM")?, Symbol::new("XOM")?];
//!
//! let csv = provider.fetch_quotes(&symbols, &QuoteField::SCHEMA).await?;
//! println!("{csv}");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use report_core::{
    DataProvider, NewsProvider, QuoteField, QuoteProvider, ReportError, Result, Symbol,
};
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::{debug, instrument};

/// Yahoo Finance CSV quote download URL.
pub const QUOTES_URL: &str = "http://finance.yahoo.com/d/quotes.csv";

/// Yahoo Finance headline page URL.
pub const NEWS_URL: &str = "http://finance.yahoo.com/q/h";

/// Default spacing between requests.
pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(250);

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent for HTTP requests.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Yahoo Finance data provider.
///
/// Implements [`DataProvider`], [`QuoteProvider`], and [`NewsProvider`].
#[derive(Debug)]
pub struct YahooProvider {
    client: reqwest::Client,
    quotes_url: String,
    news_url: String,
    rate_limit: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Network`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_RATE_LIMIT)
    }

    /// Create a new Yahoo Finance provider with a custom HTTP client.
    ///
    /// Uses the provided client for all HTTP requests. Rate limiting
    /// is still applied.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            quotes_url: QUOTES_URL.to_string(),
            news_url: NEWS_URL.to_string(),
            rate_limit: DEFAULT_RATE_LIMIT,
            last_request: Mutex::new(None),
        }
    }

    /// Create a new Yahoo Finance provider with a request timeout and rate limiting.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Network`] if the HTTP client cannot be built.
    pub fn with_options(timeout: Duration, rate_limit: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::Network(e.to_string()))?;

        Ok(Self::with_client(client).with_rate_limit(rate_limit))
    }

    /// Sets the minimum spacing between requests.
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: Duration) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Points the provider at different quote and news endpoints.
    #[must_use]
    pub fn with_base_urls(
        mut self,
        quotes_url: impl Into<String>,
        news_url: impl Into<String>,
    ) -> Self {
        self.quotes_url = quotes_url.into();
        self.news_url = news_url.into();
        self
    }

    /// Apply rate limiting before making a request.
    ///
    /// The lock is held across the wait, so concurrent callers are spaced
    /// out one after another.
    async fn apply_rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.rate_limit {
                let wait_time = self.rate_limit - elapsed;
                debug!("Rate limiting: waiting {}ms", wait_time.as_millis());
                sleep(wait_time).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Build the batched quote URL; symbols are joined with `+`.
    fn build_quotes_url(&self, symbols: &[Symbol], fields: &[QuoteField]) -> String {
        let tickers = symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join("+");

        format!(
            "{}?s={}&f={}",
            self.quotes_url,
            tickers,
            QuoteField::selector_string(fields)
        )
    }

    /// Build the headline page URL for a symbol and date.
    fn build_news_url(&self, symbol: &Symbol, date: NaiveDate) -> String {
        format!(
            "{}?s={}&t={}",
            self.news_url,
            symbol.as_str(),
            date.format("%Y-%m-%d")
        )
    }

    /// GET `url` and return the response body as text.
    async fn request(&self, url: &str) -> Result<String> {
        self.apply_rate_limit().await;
        debug!("Fetching: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ReportError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ReportError::RateLimited {
                provider: self.name().to_string(),
                retry_after: Some(Duration::from_secs(60)),
            });
        }

        if !response.status().is_success() {
            return Err(ReportError::Http {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ReportError::Network(e.to_string()))
    }
}

impl DataProvider for YahooProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    fn description(&self) -> &str {
        "Yahoo Finance CSV quotes and headline pages"
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    #[instrument(skip_all, fields(symbols = symbols.len()))]
    async fn fetch_quotes(&self, symbols: &[Symbol], fields: &[QuoteField]) -> Result<String> {
        if symbols.is_empty() {
            return Err(ReportError::InvalidParameter(
                "quote request needs at least one symbol".to_string(),
            ));
        }
        if fields.is_empty() {
            return Err(ReportError::InvalidParameter(
                "quote request needs at least one field".to_string(),
            ));
        }

        let url = self.build_quotes_url(symbols, fields);
        self.request(&url).await
    }
}

#[async_trait]
impl NewsProvider for YahooProvider {
    #[instrument(skip_all, fields(symbol = %symbol, date = %date))]
    async fn fetch_news(&self, symbol: &Symbol, date: NaiveDate) -> Result<String> {
        let url = self.build_news_url(symbol, date);
        self.request(&url).await
    }
}
