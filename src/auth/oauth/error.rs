//! OAuth-specific error types for the MercadoLibre API SDK.
//!
//! This module contains the error type for the two token-acquisition flows:
//! authorization-code exchange and refresh.
//!
//! # Error Types
//!
//! - [`OAuthError::MissingRefreshToken`]: refresh attempted with no refresh token held
//! - [`OAuthError::TokenRequestFailed`]: the token endpoint returned a non-2xx status
//! - [`OAuthError::MissingField`]: a 2xx response is missing a required field
//! - [`OAuthError::MalformedResponse`]: a 2xx response body is not valid JSON
//! - [`OAuthError::Transport`]: network-level failure from the HTTP transport
//!
//! # Example
//!
//! ```rust
//! use meli_api::OAuthError;
//!
//! let error = OAuthError::TokenRequestFailed {
//!     status: 403,
//!     body: r#"{"error":"invalid_grant"}"#.to_string(),
//! };
//! assert!(error.to_string().contains("403"));
//! ```

use crate::clients::TransportError;
use thiserror::Error;

/// Errors that can occur during the OAuth token flows.
///
/// The token flows surface failures as errors and never hand back a
/// response object; this is intentionally different from the plain
/// resource verbs, which always return the response and leave status
/// inspection to the caller.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// A refresh was attempted while no refresh token is held.
    ///
    /// This is checked before any network activity. It usually means the
    /// application was authorized without offline access, so the token
    /// endpoint never issued a refresh token.
    #[error("Offline access is not allowed: no refresh token is held for this session")]
    MissingRefreshToken,

    /// The token endpoint returned a non-success HTTP status.
    ///
    /// Carries the status code and the raw response body. The request is
    /// not retried.
    #[error("Token request failed with status {status}: {body}")]
    TokenRequestFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The token endpoint returned 2xx but the body is missing a required field.
    #[error("Token response is missing required field '{field}'")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The token endpoint returned 2xx but the body is not valid JSON.
    #[error("Token endpoint returned a malformed response: {reason}")]
    MalformedResponse {
        /// Description of the parse failure.
        reason: String,
    },

    /// Network or transport-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
