//! Report configuration.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use report_core::{DEFAULT_HEADLINE_MARKER, QuoteField, ReportError, Result};

/// What to do when a single symbol, quote row or headline item fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Fail the whole report.
    #[default]
    Abort,
    /// Log a warning, substitute a placeholder and continue.
    Skip,
}

/// Settings for [`ReportAssembler`](crate::ReportAssembler).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Day whose headlines are requested; `None` means today.
    pub news_date: Option<NaiveDate>,
    /// Quote columns requested from the service, in response order.
    pub fields: Vec<QuoteField>,
    /// Marker preceding the headline list on news pages.
    pub headline_marker: String,
    /// Maximum number of news pages fetched at once.
    pub concurrency: usize,
    /// Policy for failed news fetches, bad quote rows and unformattable numbers.
    pub error_policy: ErrorPolicy,
    /// Policy for headline items missing one of their markers.
    pub malformed_headlines: ErrorPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            news_date: None,
            fields: QuoteField::SCHEMA.to_vec(),
            headline_marker: DEFAULT_HEADLINE_MARKER.to_string(),
            concurrency: 1,
            error_policy: ErrorPolicy::Abort,
            malformed_headlines: ErrorPolicy::Skip,
        }
    }
}

impl ReportConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request headlines for a specific day instead of today.
    #[must_use]
    pub fn with_news_date(mut self, date: NaiveDate) -> Self {
        self.news_date = Some(date);
        self
    }

    /// Request a different set of quote columns.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<QuoteField>) -> Self {
        self.fields = fields;
        self
    }

    /// Use a different marker to locate the headline list.
    #[must_use]
    pub fn with_headline_marker(mut self, marker: impl Into<String>) -> Self {
        self.headline_marker = marker.into();
        self
    }

    /// Fetch up to `concurrency` news pages at once.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the policy for per-symbol failures.
    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set the policy for malformed headline items.
    #[must_use]
    pub fn with_malformed_headlines(mut self, policy: ErrorPolicy) -> Self {
        self.malformed_headlines = policy;
        self
    }

    /// The day whose headlines are requested.
    #[must_use]
    pub fn news_date(&self) -> NaiveDate {
        self.news_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Checks the settings for values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidParameter`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(ReportError::InvalidParameter(
                "at least one quote field is required".to_string(),
            ));
        }
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].contains(field) {
                return Err(ReportError::InvalidParameter(format!(
                    "quote field {field} requested twice"
                )));
            }
        }
        if self.headline_marker.is_empty() {
            return Err(ReportError::InvalidParameter(
                "headline marker must not be empty".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(ReportError::InvalidParameter(
                "concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.fields, QuoteField::SCHEMA);
        assert_eq!(config.headline_marker, "</span></h3><ul>");
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.error_policy, ErrorPolicy::Abort);
        assert_eq!(config.malformed_headlines, ErrorPolicy::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_news_date_override() {
        let date = NaiveDate::from_ymd_opt(2012, 5, 14).unwrap();
        let config = ReportConfig::new().with_news_date(date);
        assert_eq!(config.news_date(), date);
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        assert!(ReportConfig::new().with_fields(vec![]).validate().is_err());
        assert!(
            ReportConfig::new()
                .with_fields(vec![QuoteField::Symbol, QuoteField::Symbol])
                .validate()
                .is_err()
        );
        assert!(ReportConfig::new().with_headline_marker("").validate().is_err());
        assert!(ReportConfig::new().with_concurrency(0).validate().is_err());
    }

    #[test]
    fn test_error_policy_serde_names() {
        assert_eq!(serde_json::to_string(&ErrorPolicy::Skip).unwrap(), "\"skip\"");
        assert_eq!(
            serde_json::from_str::<ErrorPolicy>("\"abort\"").unwrap(),
            ErrorPolicy::Abort
        );
        assert!(serde_json::from_str::<ErrorPolicy>("\"Abort\"").is_err());
    }
}
