//! OAuth 2.0 flows for MercadoLibre applications.
//!
//! MercadoLibre uses the standard OAuth 2.0 authorization-code grant with
//! optional refresh tokens (issued when the application has offline access
//! enabled). Both flows live on the [`Meli`](crate::Meli) session type; this
//! module holds the flow-specific error taxonomy.
//!
//! # Authorization Code Grant
//!
//! 1. Build an authorization URL with [`Meli::auth_url`](crate::Meli::auth_url)
//!    and redirect the user to their country's authorization server.
//! 2. Receive the `code` query parameter on your redirect URI.
//! 3. Exchange it with [`Meli::authorize`](crate::Meli::authorize), which
//!    stores the resulting tokens on the session.
//!
//! # Refresh Token Grant
//!
//! When the access token expires, rotate the pair with
//! [`Meli::refresh_access_token`](crate::Meli::refresh_access_token). The
//! refresh flow requires a refresh token to already be held and requires
//! the endpoint to issue a complete replacement triple (access token,
//! refresh token, lifetime), since a refreshed session without a forward
//! refresh token would leave the caller with no way to renew again.
//!
//! # Error Semantics
//!
//! Both flows fail loudly: non-2xx responses become
//! [`OAuthError::TokenRequestFailed`] rather than a response object, and a
//! 2xx response missing required fields becomes
//! [`OAuthError::MissingField`]. Nothing is retried, and the session's
//! token state is untouched on any failure.

mod error;

pub use error::OAuthError;
