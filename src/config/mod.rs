//! Configuration types for the MercadoLibre API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with MercadoLibre.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MeliConfig`]: The main configuration struct holding all SDK settings
//! - [`MeliConfigBuilder`]: A builder for constructing [`MeliConfig`] instances
//! - [`ClientId`]: A validated application ID newtype
//! - [`ClientSecret`]: A validated application secret newtype with masked debug output
//! - [`Site`]: The country site selecting the authorization server
//!
//! # Example
//!
//! ```rust
//! use meli_api::{ClientId, ClientSecret, MeliConfig, Site};
//!
//! let config = MeliConfig::builder()
//!     .client_id(ClientId::new("my-app-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .site(Site::Argentina)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod site;

pub use newtypes::{ClientId, ClientSecret};
pub use site::Site;

use crate::error::ConfigError;

/// The fixed REST API root shared by all country sites.
pub const API_ROOT_URL: &str = "https://api.mercadolibre.com";

/// The relative path of the OAuth token-exchange endpoint.
pub const OAUTH_TOKEN_PATH: &str = "/oauth/token";

/// Minimum TLS version for the default HTTP transport.
///
/// Applied when [`crate::ReqwestTransport`] is constructed from a
/// [`MeliConfig`]. Custom transports are free to ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinTlsVersion {
    /// Require at least TLS 1.2.
    Tls1_2,
    /// Require at least TLS 1.3.
    Tls1_3,
}

/// Configuration for the MercadoLibre API SDK.
///
/// This struct holds everything a session needs beyond its tokens: the
/// application credentials, the country site, and the endpoint settings.
/// It is immutable once built; the API root and OAuth path never change
/// at runtime.
///
/// # Thread Safety
///
/// `MeliConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use meli_api::{ClientId, ClientSecret, MeliConfig, Site};
///
/// let config = MeliConfig::builder()
///     .client_id(ClientId::new("app-id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .site(Site::Brazil)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.site(), Site::Brazil);
/// assert_eq!(config.api_root(), "https://api.mercadolibre.com");
/// ```
#[derive(Clone, Debug)]
pub struct MeliConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    site: Site,
    api_root: String,
    user_agent_prefix: Option<String>,
    min_tls_version: Option<MinTlsVersion>,
}

impl MeliConfig {
    /// Creates a new builder for constructing a `MeliConfig`.
    #[must_use]
    pub fn builder() -> MeliConfigBuilder {
        MeliConfigBuilder::new()
    }

    /// Returns the application client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the application client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the country site.
    #[must_use]
    pub const fn site(&self) -> Site {
        self.site
    }

    /// Returns the REST API root URL.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the minimum TLS version for the default transport, if configured.
    #[must_use]
    pub const fn min_tls_version(&self) -> Option<MinTlsVersion> {
        self.min_tls_version
    }
}

// Verify MeliConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MeliConfig>();
};

/// Builder for constructing [`MeliConfig`] instances.
///
/// Required fields are `client_id`, `client_secret`, and `site`. There is
/// deliberately no default site: picking an authorization server on the
/// caller's behalf would send users to the wrong country's login page.
///
/// # Defaults
///
/// - `api_root`: [`API_ROOT_URL`]
/// - `user_agent_prefix`: `None`
/// - `min_tls_version`: `None` (transport default)
///
/// # Example
///
/// ```rust
/// use meli_api::{ClientId, ClientSecret, MeliConfig, MinTlsVersion, Site};
///
/// let config = MeliConfig::builder()
///     .client_id(ClientId::new("app-id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .site(Site::Chile)
///     .user_agent_prefix("MyApp/1.0")
///     .min_tls_version(MinTlsVersion::Tls1_2)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MeliConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    site: Option<Site>,
    api_root: Option<String>,
    user_agent_prefix: Option<String>,
    min_tls_version: Option<MinTlsVersion>,
}

impl MeliConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the application client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the country site (required).
    #[must_use]
    pub const fn site(mut self, site: Site) -> Self {
        self.site = Some(site);
        self
    }

    /// Overrides the REST API root URL.
    ///
    /// Defaults to [`API_ROOT_URL`]. Overriding is intended for proxies and
    /// test servers; a trailing slash is stripped so path normalization
    /// stays uniform.
    #[must_use]
    pub fn api_root(mut self, url: impl Into<String>) -> Self {
        self.api_root = Some(url.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the minimum TLS version for the default transport.
    #[must_use]
    pub const fn min_tls_version(mut self, version: MinTlsVersion) -> Self {
        self.min_tls_version = Some(version);
        self
    }

    /// Builds the [`MeliConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id`,
    /// `client_secret`, or `site` are not set, and
    /// [`ConfigError::InvalidApiRoot`] if an API root override has no scheme.
    pub fn build(self) -> Result<MeliConfig, ConfigError> {
        let client_id = self.client_id.ok_or(ConfigError::MissingRequiredField {
            field: "client_id",
        })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;
        let site = self
            .site
            .ok_or(ConfigError::MissingRequiredField { field: "site" })?;

        let api_root = match self.api_root {
            Some(url) => {
                if !url.contains("://") {
                    return Err(ConfigError::InvalidApiRoot { url });
                }
                url.trim_end_matches('/').to_string()
            }
            None => API_ROOT_URL.to_string(),
        };

        Ok(MeliConfig {
            client_id,
            client_secret,
            site,
            api_root,
            user_agent_prefix: self.user_agent_prefix,
            min_tls_version: self.min_tls_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> MeliConfigBuilder {
        MeliConfigBuilder::new()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .site(Site::Mexico)
    }

    #[test]
    fn test_builder_requires_client_id() {
        let result = MeliConfigBuilder::new()
            .client_secret(ClientSecret::new("secret").unwrap())
            .site(Site::Mexico)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "client_id" })
        ));
    }

    #[test]
    fn test_builder_requires_client_secret() {
        let result = MeliConfigBuilder::new()
            .client_id(ClientId::new("id").unwrap())
            .site(Site::Mexico)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "client_secret"
            })
        ));
    }

    #[test]
    fn test_builder_requires_site() {
        let result = MeliConfigBuilder::new()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "site" })
        ));
    }

    #[test]
    fn test_api_root_defaults_to_production() {
        let config = minimal_builder().build().unwrap();
        assert_eq!(config.api_root(), "https://api.mercadolibre.com");
    }

    #[test]
    fn test_api_root_override_strips_trailing_slash() {
        let config = minimal_builder()
            .api_root("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(config.api_root(), "http://localhost:8080");
    }

    #[test]
    fn test_api_root_override_requires_scheme() {
        let result = minimal_builder().api_root("localhost:8080").build();
        assert!(matches!(result, Err(ConfigError::InvalidApiRoot { .. })));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let config = minimal_builder().build().unwrap();
        assert!(config.user_agent_prefix().is_none());
        assert!(config.min_tls_version().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = minimal_builder()
            .user_agent_prefix("MyApp/1.0")
            .min_tls_version(MinTlsVersion::Tls1_3)
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.min_tls_version(), Some(MinTlsVersion::Tls1_3));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeliConfig>();
    }

    #[test]
    fn test_debug_output_masks_secret() {
        let config = minimal_builder().build().unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MeliConfig"));
        assert!(debug_str.contains("ClientSecret(*****)"));
    }
}
