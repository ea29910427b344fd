//! Core data types for the report pipeline.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`QuoteField`] - One column of the quote service's field selector
//! - [`QuoteRecord`] - Quote statistics for one symbol
//! - [`HeadlineRecord`] - One news headline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ReportError, Result};

/// Placeholder the quote service uses for values it does not have.
pub const NOT_AVAILABLE: &str = "N/A";

/// A trading symbol/ticker.
///
/// Symbols are opaque: they are kept exactly as given. They must be non-empty and
/// may not contain whitespace, `+` or `,`, which delimit symbols in batch requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol, rejecting empty tokens and batch delimiters.
    pub fn new(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '+' || c == ',') {
            return Err(ReportError::InvalidSymbol(s));
        }
        Ok(Self(s))
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ReportError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// A column of the quote service's CSV response.
///
/// Each field has a selector code; concatenating the codes of the requested
/// fields yields the `f=` parameter of the quote request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteField {
    /// Ticker symbol (`s`).
    Symbol,
    /// Date of the last trade (`d1`).
    LastTradeDate,
    /// Last trade price (`l1`).
    LastTrade,
    /// Absolute change since prior close (`c1`).
    Change,
    /// Dividend per share (`d`).
    DividendPerShare,
    /// Dividend pay date (`r1`).
    DividendPayDate,
    /// Ex-dividend date (`q`).
    ExDividendDate,
}

impl QuoteField {
    /// The default schema, in response column order.
    pub const SCHEMA: [Self; 7] = [
        Self::Symbol,
        Self::LastTradeDate,
        Self::LastTrade,
        Self::Change,
        Self::DividendPerShare,
        Self::DividendPayDate,
        Self::ExDividendDate,
    ];

    /// Selector code understood by the quote service.
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::Symbol => "s",
            Self::LastTradeDate => "d1",
            Self::LastTrade => "l1",
            Self::Change => "c1",
            Self::DividendPerShare => "d",
            Self::DividendPayDate => "r1",
            Self::ExDividendDate => "q",
        }
    }

    /// Human-readable column label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Symbol => "Symbol",
            Self::LastTradeDate => "Last trade date",
            Self::LastTrade => "Last trade",
            Self::Change => "Change",
            Self::DividendPerShare => "Dividend/share",
            Self::DividendPayDate => "Dividend pay date",
            Self::ExDividendDate => "Ex-dividend date",
        }
    }

    /// Concatenates the selector codes of `fields`, e.g. `sd1l1c1dr1q` for [`Self::SCHEMA`].
    #[must_use]
    pub fn selector_string(fields: &[Self]) -> String {
        fields.iter().map(Self::selector).collect()
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quote statistics for one symbol, as returned by the quote service.
///
/// Every field is always populated; [`NOT_AVAILABLE`] is a value, not an absence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Ticker symbol as echoed by the service.
    pub symbol: String,
    /// Date of the last trade.
    pub last_trade_date: String,
    /// Last trade price.
    pub last_trade: String,
    /// Absolute change since prior close.
    pub change: String,
    /// Dividend per share.
    pub dividend_per_share: String,
    /// Dividend pay date.
    pub dividend_pay_date: String,
    /// Ex-dividend date.
    pub ex_dividend_date: String,
}

impl Default for QuoteRecord {
    fn default() -> Self {
        Self {
            symbol: NOT_AVAILABLE.to_string(),
            last_trade_date: NOT_AVAILABLE.to_string(),
            last_trade: NOT_AVAILABLE.to_string(),
            change: NOT_AVAILABLE.to_string(),
            dividend_per_share: NOT_AVAILABLE.to_string(),
            dividend_pay_date: NOT_AVAILABLE.to_string(),
            ex_dividend_date: NOT_AVAILABLE.to_string(),
        }
    }
}

impl QuoteRecord {
    /// A record for `symbol` with every other field set to [`NOT_AVAILABLE`].
    #[must_use]
    pub fn unavailable(symbol: &Symbol) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    /// Returns the value of `field`.
    #[must_use]
    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Symbol => &self.symbol,
            QuoteField::LastTradeDate => &self.last_trade_date,
            QuoteField::LastTrade => &self.last_trade,
            QuoteField::Change => &self.change,
            QuoteField::DividendPerShare => &self.dividend_per_share,
            QuoteField::DividendPayDate => &self.dividend_pay_date,
            QuoteField::ExDividendDate => &self.ex_dividend_date,
        }
    }

    /// Sets the value of `field`.
    pub fn set(&mut self, field: QuoteField, value: impl Into<String>) {
        let slot = match field {
            QuoteField::Symbol => &mut self.symbol,
            QuoteField::LastTradeDate => &mut self.last_trade_date,
            QuoteField::LastTrade => &mut self.last_trade,
            QuoteField::Change => &mut self.change,
            QuoteField::DividendPerShare => &mut self.dividend_per_share,
            QuoteField::DividendPayDate => &mut self.dividend_pay_date,
            QuoteField::ExDividendDate => &mut self.ex_dividend_date,
        };
        *slot = value.into();
    }
}

/// One news headline for a symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    /// Headline text, already escaped for LaTeX.
    pub title: String,
    /// Publisher name.
    pub source: String,
    /// Publication date as shown on the page.
    pub date: String,
}

impl HeadlineRecord {
    /// Creates a new headline record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            date: date.into(),
        }
    }
}
