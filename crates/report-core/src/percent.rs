//! Percent-change derivation and rendering.
//!
//! The quote service reports the last trade and the absolute change; the percent
//! change is relative to the prior close, `last_trade - change`. It is computed
//! on `f64` and only turned into text by [`render_percent`].

use crate::{
    error::{ReportError, Result},
    truncate::truncate,
    types::{NOT_AVAILABLE, QuoteRecord},
};

/// LaTeX percent sign appended to rendered values.
const PERCENT_MARKER: &str = r"\%";

/// Fractional digits kept in the rendered percentage.
const PLACES: u32 = 2;

/// Computes `change / (last_trade - change) * 100`.
///
/// # Errors
///
/// Returns [`ReportError::ZeroPriorClose`] when the prior close is zero.
pub fn compute_percent(symbol: &str, last_trade: f64, change: f64) -> Result<f64> {
    let prior_close = last_trade - change;
    if prior_close == 0.0 {
        return Err(ReportError::ZeroPriorClose(symbol.to_string()));
    }
    Ok(change * 100.0 / prior_close)
}

/// Renders a percentage truncated to two places with sign rules applied.
///
/// Non-negative values get a leading `+`, except an exact zero which renders
/// as a bare `0` without the percent marker. Negative values keep their `-`.
pub fn render_percent(pct: f64) -> Result<String> {
    let rendered = format!("{}{PERCENT_MARKER}", truncate(pct, PLACES)?);
    if rendered.contains('-') {
        return Ok(rendered);
    }
    if rendered == format!("0{PERCENT_MARKER}") {
        return Ok("0".to_string());
    }
    Ok(format!("+{rendered}"))
}

fn parse_number(field: &'static str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| ReportError::Format {
        field,
        value: value.to_string(),
    })
}

/// Derives the rendered percent-change column for a quote.
///
/// A `Change` of `N/A` yields `N/A` without touching `LastTrade`.
///
/// # Errors
///
/// Returns [`ReportError::Format`] if either value is not numeric, or
/// [`ReportError::ZeroPriorClose`] if the prior close is zero.
pub fn percent_change(record: &QuoteRecord) -> Result<String> {
    if record.change == NOT_AVAILABLE {
        return Ok(NOT_AVAILABLE.to_string());
    }

    let change = parse_number("Change", &record.change)?;
    let last_trade = parse_number("Last trade", &record.last_trade)?;
    render_percent(compute_percent(&record.symbol, last_trade, change)?)
}
