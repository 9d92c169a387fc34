//! Authentication types for the MercadoLibre API SDK.
//!
//! This module provides the token state held by a session and the OAuth
//! flow error types.
//!
//! # Overview
//!
//! - [`TokenSet`]: a session's mutable credential fields, replaced
//!   wholesale on each successful token exchange
//! - [`AccessTokenResponse`]: wire shape of the token endpoint response
//! - [`oauth`]: OAuth 2.0 flow documentation and error taxonomy
//!
//! # Token Lifecycle
//!
//! A session starts unauthenticated (empty [`TokenSet`]), becomes
//! authenticated through [`Meli::authorize`](crate::Meli::authorize), and
//! rotates its tokens through
//! [`Meli::refresh_access_token`](crate::Meli::refresh_access_token). The
//! library never schedules refreshes or tracks wall-clock expiry; callers
//! observe `expires_in` and decide when to refresh.

pub mod oauth;

mod token;

pub use token::{AccessTokenResponse, TokenSet};
