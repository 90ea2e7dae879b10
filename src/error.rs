//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DateField;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the client and the date-range scan.
#[derive(Debug, Error)]
pub enum Error {
    /// The date-range scan was invoked without a start or an end date.
    #[error("at least one of start_date and end_date must be provided")]
    MissingDateBounds,

    /// A review date value could not be parsed as a `YYYY-MM-DD` date.
    #[error("could not parse '{value}' as a YYYY-MM-DD date")]
    DateParse {
        /// The raw value as it appeared in the review payload.
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A review carries no string value under the requested date field.
    #[error("review has no string '{field}' value")]
    MissingDateField {
        /// The field that was looked up.
        field: DateField,
    },

    /// The HTTP request could not be completed.
    #[error("request to the Reevoo API failed")]
    Transport(#[from] reqwest::Error),

    /// A response body could not be decoded as the expected JSON shape.
    #[error("could not decode the Reevoo API response body")]
    Decode(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed as TOML.
    #[error("failed to parse config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_bounds_message() {
        let err = Error::MissingDateBounds;
        assert_eq!(
            err.to_string(),
            "at least one of start_date and end_date must be provided"
        );
    }

    #[test]
    fn test_date_parse_keeps_offending_value() {
        let source = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d").unwrap_err();
        let err = Error::DateParse {
            value: "not-a-date".to_string(),
            source,
        };
        assert!(err.to_string().contains("'not-a-date'"));
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = Error::MissingDateField {
            field: DateField::DeliveryDate,
        };
        assert!(err.to_string().contains("delivery_date"));
    }

    #[test]
    fn test_decode_wraps_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);
        assert!(matches!(err, Error::Decode(_)));
    }
}
