//! Error types for SDK configuration.
//!
//! This module contains the error type returned by configuration
//! constructors and validators.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use meli_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the application ID from your MercadoLibre app settings.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the secret key from your MercadoLibre app settings.")]
    EmptyClientSecret,

    /// The site key does not name one of the supported country sites.
    #[error("Unknown site key '{key}'. Expected one of: ARG, BRA, COL, CRC, ECU, CHL, MXN, URY, VEN, PAN, PER, PRT, DMA.")]
    UnknownSite {
        /// The unrecognized key that was provided.
        key: String,
    },

    /// The API root override is not an absolute URL.
    #[error("Invalid API root '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.mercadolibre.com').")]
    InvalidApiRoot {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let error = ConfigError::EmptyClientId;
        let message = error.to_string();
        assert!(message.contains("Client ID cannot be empty"));
    }

    #[test]
    fn test_unknown_site_error_lists_valid_keys() {
        let error = ConfigError::UnknownSite {
            key: "ZZZ".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ZZZ"));
        assert!(message.contains("MXN"));
        assert!(message.contains("DMA"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "site" };
        let message = error.to_string();
        assert!(message.contains("site"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_api_root_error_message() {
        let error = ConfigError::InvalidApiRoot {
            url: "api.mercadolibre.com".to_string(),
        };
        assert!(error.to_string().contains("api.mercadolibre.com"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyClientId;
        let _: &dyn std::error::Error = &error;
    }
}
