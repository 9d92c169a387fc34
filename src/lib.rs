//! # MercadoLibre API Rust SDK
//!
//! A Rust SDK for the MercadoLibre API, providing type-safe configuration,
//! OAuth 2.0 authentication, and a raw-response HTTP client for marketplace
//! application development.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MeliConfig`] and [`MeliConfigBuilder`]
//! - Validated newtypes for application credentials
//! - Country site resolution for the authorization endpoints via [`Site`]
//! - OAuth 2.0 authorization code flow via [`Meli::authorize`]
//! - Token refresh for expiring access tokens via [`Meli::refresh_access_token`]
//! - Async HTTP client returning raw responses for every HTTP status
//!
//! ## Quick Start
//!
//! ```rust
//! use meli_api::{ClientId, ClientSecret, Meli, MeliConfig, Site};
//!
//! // Create configuration using the builder pattern
//! let config = MeliConfig::builder()
//!     .client_id(ClientId::new("your-app-id").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .site(Site::Argentina)
//!     .build()
//!     .unwrap();
//!
//! let meli = Meli::new(config);
//! let url = meli.auth_url("https://your-app.com/callback");
//! assert!(url.starts_with("https://auth.mercadolibre.com.ar/authorization?"));
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use meli_api::{ClientId, ClientSecret, Meli, MeliConfig, Site};
//!
//! // Step 1: Configure the SDK for a country site
//! let config = MeliConfig::builder()
//!     .client_id(ClientId::new("your-app-id").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .site(Site::Brazil)
//!     .build()?;
//! let mut meli = Meli::new(config);
//!
//! // Step 2: Redirect the user to the authorization URL
//! let url = meli.auth_url("https://your-app.com/callback");
//!
//! // Step 3: Exchange the callback code for tokens
//! let access_token = meli.authorize(&code, "https://your-app.com/callback").await?;
//!
//! // Later: rotate the token pair (requires a stored refresh token)
//! let access_token = meli.refresh_access_token().await?;
//! ```
//!
//! ## Making Requests
//!
//! The resource verbs return the raw response for every HTTP status; only
//! network-level failures are errors:
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//!
//! let mut query = HashMap::new();
//! query.insert("access_token".to_string(), access_token);
//!
//! let response = meli.get("/users/me", Some(query)).await?;
//! if response.is_ok() {
//!     let user: serde_json::Value = response.json()?;
//! } else {
//!     eprintln!("API returned {}: {}", response.status, response.body);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Type safety**: credentials are validated newtypes; the country site
//!   is an enum, so an unknown site key fails at parse time, not mid-flow.
//! - **Raw responses**: the client never converts an HTTP status into an
//!   error. The OAuth flows layer stricter semantics on top.
//! - **Atomic token state**: a session's token fields only change together,
//!   through the OAuth operations; there are no partial updates.
//! - **Injectable transport**: [`HttpTransport`] lets tests substitute the
//!   network with spies.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
mod meli;

pub use auth::oauth::OAuthError;
pub use auth::{AccessTokenResponse, TokenSet};
pub use clients::{
    HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, HttpTransport,
    InvalidHttpRequestError, ReqwestTransport, TransportError, TransportRequest, SDK_VERSION,
};
pub use config::{
    ClientId, ClientSecret, MeliConfig, MeliConfigBuilder, MinTlsVersion, Site, API_ROOT_URL,
    OAUTH_TOKEN_PATH,
};
pub use error::ConfigError;
pub use meli::Meli;
