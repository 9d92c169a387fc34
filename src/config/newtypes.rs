//! Validated newtype wrappers for application credentials.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated MercadoLibre application ID.
///
/// This newtype ensures the client ID is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use meli_api::ClientId;
///
/// let id = ClientId::new("1234567890").unwrap();
/// assert_eq!(id.as_ref(), "1234567890");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated MercadoLibre application secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use meli_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        let result = ClientId::new("");
        assert!(matches!(result, Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_id_preserves_value() {
        let id = ClientId::new("8765432109").unwrap();
        assert_eq!(id.as_ref(), "8765432109");
    }

    #[test]
    fn test_client_secret_rejects_empty_string() {
        let result = ClientSecret::new("");
        assert!(matches!(result, Err(ConfigError::EmptyClientSecret)));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }
}
