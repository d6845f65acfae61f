//! Adapter error types.

use thiserror::Error;

/// Errors raised while running a job against the Alpaca API.
///
/// Every variant recovers into the standard error envelope at the job
/// boundary; none of them terminate the process.
#[derive(Debug, Error, Clone)]
pub enum AdapterError {
    /// A required job input field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The outbound request to Alpaca failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream body was not the expected JSON shape.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Authentication failed.
    #[error("Authentication failed")]
    AuthenticationFailed,
}

impl AdapterError {
    /// Validation error with the fixed `<Field> is required` message.
    pub(crate) fn missing(field: &str) -> Self {
        Self::Validation(format!("{field} is required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_is_verbatim() {
        assert_eq!(
            AdapterError::missing("Symbol").to_string(),
            "Symbol is required"
        );
        assert_eq!(
            AdapterError::missing("Buy/Sell Side").to_string(),
            "Buy/Sell Side is required"
        );
    }

    #[test]
    fn network_error_message() {
        let err = AdapterError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn json_parse_error_message() {
        let err = AdapterError::JsonParse("expected value at line 1".to_string());
        assert!(err.to_string().starts_with("JSON parsing error:"));
    }
}
