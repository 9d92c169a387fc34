//! MercadoLibre country sites and their authorization servers.
//!
//! Each MercadoLibre country operates its own authorization server. The
//! [`Site`] enum maps the three-letter site key to the authorization base
//! URL used to build user-facing authorization redirects.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A MercadoLibre country site.
///
/// The site selects which country-specific authorization server issues
/// tokens for a session. The REST API root is shared across all sites;
/// only the authorization base URL varies.
///
/// Parsing an unknown key is a defined error, never a silent fallback:
///
/// ```rust
/// use meli_api::{ConfigError, Site};
///
/// let site: Site = "BRA".parse().unwrap();
/// assert_eq!(site.auth_base(), "https://auth.mercadolivre.com.br");
///
/// let err = "XXX".parse::<Site>().unwrap_err();
/// assert!(matches!(err, ConfigError::UnknownSite { .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Site {
    /// Argentina (`ARG`).
    Argentina,
    /// Brazil (`BRA`).
    Brazil,
    /// Colombia (`COL`).
    Colombia,
    /// Costa Rica (`CRC`).
    CostaRica,
    /// Ecuador (`ECU`).
    Ecuador,
    /// Chile (`CHL`).
    Chile,
    /// Mexico (`MXN`).
    Mexico,
    /// Uruguay (`URY`).
    Uruguay,
    /// Venezuela (`VEN`).
    Venezuela,
    /// Panama (`PAN`).
    Panama,
    /// Peru (`PER`).
    Peru,
    /// Portugal (`PRT`).
    Portugal,
    /// Dominican Republic (`DMA`).
    DominicanRepublic,
}

impl Site {
    /// All supported sites, in key order.
    pub const ALL: [Self; 13] = [
        Self::Argentina,
        Self::Brazil,
        Self::Colombia,
        Self::CostaRica,
        Self::Ecuador,
        Self::Chile,
        Self::Mexico,
        Self::Uruguay,
        Self::Venezuela,
        Self::Panama,
        Self::Peru,
        Self::Portugal,
        Self::DominicanRepublic,
    ];

    /// Returns the three-letter site key (e.g., `"ARG"`).
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Argentina => "ARG",
            Self::Brazil => "BRA",
            Self::Colombia => "COL",
            Self::CostaRica => "CRC",
            Self::Ecuador => "ECU",
            Self::Chile => "CHL",
            Self::Mexico => "MXN",
            Self::Uruguay => "URY",
            Self::Venezuela => "VEN",
            Self::Panama => "PAN",
            Self::Peru => "PER",
            Self::Portugal => "PRT",
            Self::DominicanRepublic => "DMA",
        }
    }

    /// Returns the authorization server base URL for this site.
    ///
    /// # Example
    ///
    /// ```rust
    /// use meli_api::Site;
    ///
    /// assert_eq!(Site::Mexico.auth_base(), "https://auth.mercadolibre.com.mx");
    /// ```
    #[must_use]
    pub const fn auth_base(self) -> &'static str {
        match self {
            Self::Argentina => "https://auth.mercadolibre.com.ar",
            Self::Brazil => "https://auth.mercadolivre.com.br",
            Self::Colombia => "https://auth.mercadolibre.com.co",
            Self::CostaRica => "https://auth.mercadolibre.com.cr",
            Self::Ecuador => "https://auth.mercadolibre.com.ec",
            Self::Chile => "https://auth.mercadolibre.cl",
            Self::Mexico => "https://auth.mercadolibre.com.mx",
            Self::Uruguay => "https://auth.mercadolibre.com.uy",
            Self::Venezuela => "https://auth.mercadolibre.com.ve",
            Self::Panama => "https://auth.mercadolibre.com.pa",
            Self::Peru => "https://auth.mercadolibre.com.pe",
            Self::Portugal => "https://auth.mercadolibre.com.pt",
            Self::DominicanRepublic => "https://auth.mercadolibre.com.do",
        }
    }
}

impl FromStr for Site {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARG" => Ok(Self::Argentina),
            "BRA" => Ok(Self::Brazil),
            "COL" => Ok(Self::Colombia),
            "CRC" => Ok(Self::CostaRica),
            "ECU" => Ok(Self::Ecuador),
            "CHL" => Ok(Self::Chile),
            "MXN" => Ok(Self::Mexico),
            "URY" => Ok(Self::Uruguay),
            "VEN" => Ok(Self::Venezuela),
            "PAN" => Ok(Self::Panama),
            "PER" => Ok(Self::Peru),
            "PRT" => Ok(Self::Portugal),
            "DMA" => Ok(Self::DominicanRepublic),
            other => Err(ConfigError::UnknownSite {
                key: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sites_resolve_to_https_auth_base() {
        for site in Site::ALL {
            let base = site.auth_base();
            assert!(base.starts_with("https://auth.mercadoli"), "{base}");
            assert!(!base.ends_with('/'));
        }
    }

    #[test]
    fn test_key_round_trip_for_all_sites() {
        for site in Site::ALL {
            let parsed: Site = site.as_key().parse().unwrap();
            assert_eq!(parsed, site);
        }
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        for key in ["USA", "mxn", "", "MX"] {
            let result = key.parse::<Site>();
            assert!(
                matches!(result, Err(ConfigError::UnknownSite { .. })),
                "key {key:?} should not parse"
            );
        }
    }

    #[test]
    fn test_unknown_key_error_carries_the_key() {
        let err = "ESP".parse::<Site>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownSite {
                key: "ESP".to_string()
            }
        );
    }

    #[test]
    fn test_display_matches_key() {
        assert_eq!(Site::Brazil.to_string(), "BRA");
        assert_eq!(Site::DominicanRepublic.to_string(), "DMA");
    }

    #[test]
    fn test_documented_auth_bases() {
        assert_eq!(
            Site::Argentina.auth_base(),
            "https://auth.mercadolibre.com.ar"
        );
        assert_eq!(Site::Brazil.auth_base(), "https://auth.mercadolivre.com.br");
        assert_eq!(Site::Chile.auth_base(), "https://auth.mercadolibre.cl");
        assert_eq!(
            Site::Portugal.auth_base(),
            "https://auth.mercadolibre.com.pt"
        );
    }
}
