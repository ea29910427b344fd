//! Report assembly: quote table and news sections in input symbol order.

use std::sync::Arc;

use futures::{StreamExt, stream};
use tracing::{debug, info, warn};

use report_core::{
    HeadlineRecord, NOT_AVAILABLE, NewsProvider, QuoteProvider, QuoteRecord, Result, Symbol,
    parse_headline_items, parse_quote_rows, percent_change,
};

use crate::{
    config::{ErrorPolicy, ReportConfig},
    render::{TABLE_CLOSE, render_news_section, render_quote_row},
};

/// Builds report documents from a quote provider and a news provider.
///
/// The document is `header + quote table + news sections + footer`. Rows and
/// sections always follow the order of the input symbols; news pages may be
/// fetched concurrently but are rendered in input order.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use report::{ReportAssembler, ReportConfig, Symbol, YahooProvider};
///
/// let yahoo = Arc::new(YahooProvider::new()?);
/// let assembler = ReportAssembler::new(yahoo.clone(), yahoo)
///     .with_config(ReportConfig::new().with_concurrency(4));
///
/// let symbols = vec![Symbol::new("IBM")?, Symbol::new("XOM")?];
/// let document = assembler.assemble(&symbols, header, footer).await?;
/// ```
#[derive(Debug)]
pub struct ReportAssembler {
    quotes: Arc<dyn QuoteProvider>,
    news: Arc<dyn NewsProvider>,
    config: ReportConfig,
}

impl ReportAssembler {
    /// Create an assembler with the default configuration.
    #[must_use]
    pub fn new(quotes: Arc<dyn QuoteProvider>, news: Arc<dyn NewsProvider>) -> Self {
        Self {
            quotes,
            news,
            config: ReportConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Builds the full document around `header` and `footer`.
    ///
    /// Nothing is returned unless every stage succeeds (or is skipped under
    /// [`ErrorPolicy::Skip`]).
    pub async fn assemble(&self, symbols: &[Symbol], header: &str, footer: &str) -> Result<String> {
        self.config.validate()?;

        let table = self.quote_table(symbols).await?;
        let sections = self.news_sections(symbols).await?;

        let mut document =
            String::with_capacity(header.len() + table.len() + sections.len() + footer.len());
        document.push_str(header);
        document.push_str(&table);
        document.push_str(&sections);
        document.push_str(footer);
        Ok(document)
    }

    /// Fetches all quotes in one batch and renders the table rows plus the table close.
    ///
    /// A failed batch fetch always fails, regardless of the error policy.
    pub async fn quote_table(&self, symbols: &[Symbol]) -> Result<String> {
        let mut table = String::new();
        if symbols.is_empty() {
            table.push_str(TABLE_CLOSE);
            return Ok(table);
        }

        info!(
            provider = self.quotes.name(),
            symbols = symbols.len(),
            "Fetching quotes"
        );
        let body = self.quotes.fetch_quotes(symbols, &self.config.fields).await?;
        let rows = parse_quote_rows(&body, &self.config.fields);
        if rows.len() != symbols.len() {
            warn!(
                requested = symbols.len(),
                received = rows.len(),
                "Quote response row count differs from symbol count"
            );
        }

        let skip = self.config.error_policy == ErrorPolicy::Skip;
        let received = rows.len();
        let mut records = Vec::with_capacity(symbols.len().max(received));
        for (i, row) in rows.into_iter().enumerate() {
            match row {
                Ok(record) => records.push(record),
                Err(e) if skip => {
                    let Some(symbol) = symbols.get(i) else {
                        warn!(row = i, error = %e, "Dropping unparseable quote row");
                        continue;
                    };
                    warn!(symbol = %symbol, error = %e, "Quote row unparseable, using placeholder");
                    records.push(QuoteRecord::unavailable(symbol));
                }
                Err(e) => return Err(e),
            }
        }
        if skip {
            for symbol in symbols.iter().skip(received) {
                warn!(symbol = %symbol, "No quote row received, using placeholder");
                records.push(QuoteRecord::unavailable(symbol));
            }
        }

        for record in &records {
            let percent = match percent_change(record) {
                Ok(percent) => percent,
                Err(e) if skip => {
                    warn!(symbol = %record.symbol, error = %e, "Percent change unavailable");
                    NOT_AVAILABLE.to_string()
                }
                Err(e) => return Err(e),
            };

            debug!(symbol = %record.symbol, percent = %percent, "Rendering quote row");
            table.push_str(&render_quote_row(record, &percent));
        }

        table.push_str(TABLE_CLOSE);
        info!("Finished prices");
        Ok(table)
    }

    /// Fetches each symbol's news page and renders one section per symbol.
    pub async fn news_sections(&self, symbols: &[Symbol]) -> Result<String> {
        let date = self.config.news_date();
        let news = &self.news;

        // `buffered` yields results in input order even when fetches overlap.
        let mut pages = stream::iter(symbols)
            .map(move |symbol| async move {
                info!(symbol = %symbol, "Processing news");
                (symbol, news.fetch_news(symbol, date).await)
            })
            .buffered(self.config.concurrency.max(1));

        let mut sections = String::new();
        while let Some((symbol, page)) = pages.next().await {
            let headlines = match page {
                Ok(html) => self.headlines(symbol, &html)?,
                Err(e) if self.config.error_policy == ErrorPolicy::Skip => {
                    warn!(symbol = %symbol, error = %e, "News fetch failed, emitting empty section");
                    Vec::new()
                }
                Err(e) => return Err(e),
            };
            sections.push_str(&render_news_section(symbol, &headlines));
        }
        Ok(sections)
    }

    /// Extracts headlines from a news page, applying the malformed-item policy.
    fn headlines(&self, symbol: &Symbol, html: &str) -> Result<Vec<HeadlineRecord>> {
        let mut headlines = Vec::new();
        for item in parse_headline_items(html, &self.config.headline_marker) {
            match item {
                Ok(headline) => headlines.push(headline),
                Err(e) if self.config.malformed_headlines == ErrorPolicy::Skip => {
                    warn!(symbol = %symbol, error = %e, "Skipping malformed headline");
                }
                Err(e) => return Err(e),
            }
        }
        debug!(symbol = %symbol, count = headlines.len(), "Parsed headlines");
        Ok(headlines)
    }
}
