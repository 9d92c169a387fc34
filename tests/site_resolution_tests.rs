//! Integration tests for country site resolution.
//!
//! These tests verify the mapping from site keys to authorization
//! endpoints, strict parsing of unknown keys, and the way a session's
//! authorization URL follows its configured site.

use meli_api::{ClientId, ClientSecret, ConfigError, Meli, MeliConfig, Site};

fn create_test_config(site: Site) -> MeliConfig {
    MeliConfig::builder()
        .client_id(ClientId::new("123456").unwrap())
        .client_secret(ClientSecret::new("a-secret").unwrap())
        .site(site)
        .build()
        .unwrap()
}

// ============================================================================
// Site Key Round-trips
// ============================================================================

#[test]
fn test_every_site_key_parses_back_to_itself() {
    for site in Site::ALL {
        let parsed: Site = site.as_key().parse().unwrap();
        assert_eq!(parsed, site);
    }
}

#[test]
fn test_site_count_matches_documented_coverage() {
    assert_eq!(Site::ALL.len(), 13);
}

#[test]
fn test_site_display_is_the_key() {
    assert_eq!(Site::Mexico.to_string(), "MXN");
    assert_eq!(Site::Brazil.to_string(), "BRA");
    assert_eq!(Site::DominicanRepublic.to_string(), "DMA");
}

// ============================================================================
// Authorization Endpoints
// ============================================================================

#[test]
fn test_documented_authorization_endpoints() {
    let expected = [
        (Site::Argentina, "https://auth.mercadolibre.com.ar"),
        (Site::Brazil, "https://auth.mercadolivre.com.br"),
        (Site::Colombia, "https://auth.mercadolibre.com.co"),
        (Site::CostaRica, "https://auth.mercadolibre.com.cr"),
        (Site::Ecuador, "https://auth.mercadolibre.com.ec"),
        (Site::Chile, "https://auth.mercadolibre.cl"),
        (Site::Mexico, "https://auth.mercadolibre.com.mx"),
        (Site::Uruguay, "https://auth.mercadolibre.com.uy"),
        (Site::Venezuela, "https://auth.mercadolibre.com.ve"),
        (Site::Panama, "https://auth.mercadolibre.com.pa"),
        (Site::Peru, "https://auth.mercadolibre.com.pe"),
        (Site::Portugal, "https://auth.mercadolibre.com.pt"),
        (Site::DominicanRepublic, "https://auth.mercadolibre.com.do"),
    ];

    for (site, base) in expected {
        assert_eq!(site.auth_base(), base, "endpoint mismatch for {site}");
    }
}

#[test]
fn test_each_site_has_a_distinct_endpoint() {
    let mut bases: Vec<_> = Site::ALL.iter().map(|s| s.auth_base()).collect();
    bases.sort_unstable();
    bases.dedup();
    assert_eq!(bases.len(), Site::ALL.len());
}

// ============================================================================
// Unknown Keys
// ============================================================================

#[test]
fn test_unknown_key_is_an_error_not_a_fallback() {
    for key in ["USA", "ESP", "BOL", "", "mxn", "Mxn", " MXN"] {
        let result: Result<Site, _> = key.parse();
        assert!(
            matches!(result, Err(ConfigError::UnknownSite { .. })),
            "key {key:?} should not resolve"
        );
    }
}

#[test]
fn test_unknown_key_error_names_the_key() {
    let error = "XYZ".parse::<Site>().unwrap_err();
    let message = error.to_string();
    assert!(message.contains("XYZ"));
    assert!(message.contains("MXN"));
}

// ============================================================================
// Session Integration
// ============================================================================

#[test]
fn test_auth_url_targets_the_configured_site() {
    for site in Site::ALL {
        let meli = Meli::new(create_test_config(site));
        let url = meli.auth_url("https://myapp.example.com/callback");
        assert!(
            url.starts_with(&format!("{}/authorization?", site.auth_base())),
            "auth URL for {site} was {url}"
        );
    }
}

#[test]
fn test_auth_url_carries_client_id_and_encoded_redirect() {
    let meli = Meli::new(create_test_config(Site::Mexico));
    let url = meli.auth_url("https://myapp.example.com/callback?state=1");

    assert!(url.contains("client_id=123456"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri=https%3A%2F%2Fmyapp.example.com%2Fcallback%3Fstate%3D1"));
}
