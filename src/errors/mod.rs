//! Error types for the F1 data crate.
//!
//! [`F1DataError`] covers everything a single upstream source can fail with:
//! transport errors, timeouts, bad HTTP statuses, and malformed payloads.
//! Errors never escape the composite resolver — a failed provider is logged
//! and the next one in the chain is tried.

use thiserror::Error;

/// Errors that can occur while fetching F1 data from a single provider.
#[derive(Error, Debug)]
pub enum F1DataError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider's response body could not be parsed.
    #[error("Parse error from {provider}: {message}")]
    Parse {
        /// The provider whose payload failed to parse
        provider: String,
        /// Description of the parse failure
        message: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The operation is not supported by this provider.
    ///
    /// Note that "no data" is not an error: providers answer those queries
    /// with an empty collection or `None`.
    #[error("Operation not supported: {operation} ({provider})")]
    NotSupported {
        /// The unsupported operation
        operation: String,
        /// The provider that does not support it
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = F1DataError::Timeout {
            provider: "ERGAST".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: ERGAST");

        let error = F1DataError::HttpStatus {
            provider: "OPENF1".to_string(),
            status: 503,
        };
        assert_eq!(format!("{}", error), "HTTP 503 from OPENF1");

        let error = F1DataError::ProviderError {
            provider: "ERGAST".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: ERGAST - connection reset"
        );
    }
}
