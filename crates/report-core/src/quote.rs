//! Quote response parsing.
//!
//! The quote service answers a batch request with one CSV row per symbol, in
//! request order. Values are mapped positionally onto the requested
//! [`QuoteField`] list; rows are never reordered.

use tracing::debug;

use crate::{
    error::{ReportError, Result},
    types::{QuoteField, QuoteRecord},
};

/// Parses a quote response, returning one result per row.
///
/// A row whose value count differs from `fields.len()` yields
/// [`ReportError::FieldCount`] without affecting the other rows. Fields of the
/// schema not present in `fields` keep their `N/A` placeholder.
pub fn parse_quote_rows(body: &str, fields: &[QuoteField]) -> Vec<Result<QuoteRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.trim().as_bytes());

    reader
        .records()
        .enumerate()
        .map(|(row, record)| {
            let record = record.map_err(|e| ReportError::Parse(format!("quote row {row}: {e}")))?;
            if record.len() != fields.len() {
                return Err(ReportError::FieldCount {
                    row,
                    expected: fields.len(),
                    found: record.len(),
                });
            }

            let mut quote = QuoteRecord::default();
            for (field, value) in fields.iter().zip(record.iter()) {
                quote.set(*field, value);
            }
            debug!(row, symbol = %quote.symbol, "Parsed quote row");
            Ok(quote)
        })
        .collect()
}

/// Parses a quote response, failing on the first malformed row.
///
/// # Errors
///
/// Returns the error of the first row that could not be parsed.
pub fn parse_quotes(body: &str, fields: &[QuoteField]) -> Result<Vec<QuoteRecord>> {
    parse_quote_rows(body, fields).into_iter().collect()
}
