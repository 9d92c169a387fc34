//! HTTP-specific error types for the MercadoLibre API SDK.
//!
//! # Error Handling
//!
//! The client layer distinguishes two failure classes:
//!
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`TransportError`]: the network layer failed; no response was obtained
//!
//! HTTP-level failures (4xx/5xx) are deliberately *not* errors for resource
//! calls: the dispatcher returns the response object for every status and
//! leaves inspection to the caller.

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
///
/// # Example
///
/// ```rust
/// use meli_api::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::QueryInPath {
///     path: "/items?limit=5".to_string(),
/// };
/// assert!(error.to_string().contains("/items?limit=5"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The path embeds its own query string.
    ///
    /// Query parameters must be passed separately so the dispatcher's
    /// query encoding is the single source of the final query string.
    #[error("Path '{path}' must not contain a query string; pass query parameters separately.")]
    QueryInPath {
        /// The offending path.
        path: String,
    },
}

/// Error returned when the HTTP transport fails at the network level.
///
/// Covers connection failures, DNS failures, and timeouts. The dispatcher
/// does not catch or retry these; they propagate unchanged to the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error from the reqwest transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport implementation.
    #[error("Transport failure: {reason}")]
    Failed {
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_in_path_names_the_path() {
        let error = InvalidHttpRequestError::QueryInPath {
            path: "items?seller_id=1".to_string(),
        };
        assert!(error.to_string().contains("items?seller_id=1"));
        assert!(error.to_string().contains("separately"));
    }

    #[test]
    fn test_transport_failed_includes_reason() {
        let error = TransportError::Failed {
            reason: "connection refused".to_string(),
        };
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::QueryInPath {
            path: "p?q".to_string(),
        };
        let _ = invalid;

        let transport: &dyn std::error::Error = &TransportError::Failed {
            reason: "test".to_string(),
        };
        let _ = transport;
    }
}
