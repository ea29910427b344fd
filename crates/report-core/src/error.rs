//! Error types for report operations.
//!
//! This module defines [`ReportError`] which covers every failure the pipeline
//! can hit: fetching payloads, parsing quote rows and headline items, and
//! formatting derived numbers.

use thiserror::Error;

/// Errors that can occur while building a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Http {
        /// Response status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// Rate limit exceeded by a provider.
    #[error("Rate limited by {provider}: retry after {retry_after:?}")]
    RateLimited {
        /// The provider that rate limited the request.
        provider: String,
        /// Suggested time to wait before retrying.
        retry_after: Option<std::time::Duration>,
    },

    /// A quote row did not have one value per requested field.
    #[error("Quote row {row} has {found} fields, expected {expected}")]
    FieldCount {
        /// Zero-based row index in the response.
        row: usize,
        /// Number of requested fields.
        expected: usize,
        /// Number of values found in the row.
        found: usize,
    },

    /// A headline item was missing one of its markers.
    #[error("Malformed headline item (missing {marker:?}): {item}")]
    MalformedHeadline {
        /// The marker that could not be found.
        marker: &'static str,
        /// The raw item text.
        item: String,
    },

    /// Error parsing data from a provider.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value could not be used as a number.
    #[error("Cannot format {field} value {value:?} as a number")]
    Format {
        /// The field being formatted.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// Percent change is undefined because the prior close is zero.
    #[error("Prior close is zero for {0}, percent change is undefined")]
    ZeroPriorClose(String),

    /// A symbol failed validation.
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Reading or writing report files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Returns true for transport-level failures (network, HTTP status, rate limiting).
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Http { .. } | Self::RateLimited { .. }
        )
    }
}

/// Result type alias using [`ReportError`].
pub type Result<T> = std::result::Result<T, ReportError>;
