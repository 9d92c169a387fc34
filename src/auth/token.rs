//! Token state for an authenticated session.
//!
//! This module provides the [`TokenSet`] type holding a session's mutable
//! credential fields and the [`AccessTokenResponse`] wire type returned by
//! the token endpoint.

use serde::Deserialize;

/// The mutable credential state of a session.
///
/// A `TokenSet` holds the access token, the refresh token, and the reported
/// token lifetime. The three fields are only ever replaced together, in one
/// step, from a successful token exchange; there is no field-level setter.
/// The library does not track wall-clock expiry: `expires_in` is the raw
/// seconds count reported by the token endpoint, and observing expiry is
/// the caller's responsibility.
///
/// # Example
///
/// ```rust
/// use meli_api::TokenSet;
///
/// let tokens = TokenSet::new();
/// assert!(tokens.access_token().is_none());
/// assert!(tokens.refresh_token().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSet {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<u64>,
}

impl TokenSet {
    /// Creates an empty token set (unauthenticated state).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            expires_in: None,
        }
    }

    /// Creates a token set from previously persisted tokens.
    ///
    /// Empty strings normalize to `None` so a stored empty marker behaves
    /// the same as an absent token.
    #[must_use]
    pub fn from_stored(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.is_empty()),
            refresh_token: refresh_token.filter(|t| !t.is_empty()),
            expires_in: None,
        }
    }

    /// Returns the access token, if one is held.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the refresh token, if one is held.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Returns the token lifetime in seconds, as reported by the last exchange.
    #[must_use]
    pub const fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    /// Replaces the whole token set in one step.
    ///
    /// Every successful token exchange goes through here, so the set is
    /// never left partially updated: an exchange without a refresh token
    /// clears the stored refresh token rather than keeping a stale one.
    pub(crate) fn replace(
        &mut self,
        access_token: String,
        refresh_token: Option<String>,
        expires_in: Option<u64>,
    ) {
        self.access_token = Some(access_token);
        self.refresh_token = refresh_token.filter(|t| !t.is_empty());
        self.expires_in = expires_in;
    }
}

/// Wire shape of the OAuth token endpoint response.
///
/// All fields are optional so the flows can report exactly which required
/// field a 2xx response is missing. Which fields are required depends on
/// the flow: the authorization-code exchange tolerates a missing
/// `refresh_token`, the refresh flow does not.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The new access token.
    pub access_token: Option<String>,
    /// The new refresh token, when offline access is configured.
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    pub expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_set_is_empty() {
        let tokens = TokenSet::new();
        assert!(tokens.access_token().is_none());
        assert!(tokens.refresh_token().is_none());
        assert!(tokens.expires_in().is_none());
    }

    #[test]
    fn test_replace_swaps_all_fields() {
        let mut tokens = TokenSet::from_stored(
            Some("AT1".to_string()),
            Some("RT1".to_string()),
        );

        tokens.replace("AT2".to_string(), Some("RT2".to_string()), Some(21600));

        assert_eq!(tokens.access_token(), Some("AT2"));
        assert_eq!(tokens.refresh_token(), Some("RT2"));
        assert_eq!(tokens.expires_in(), Some(21600));
    }

    #[test]
    fn test_replace_without_refresh_token_clears_old_one() {
        let mut tokens = TokenSet::from_stored(
            Some("AT1".to_string()),
            Some("RT1".to_string()),
        );

        tokens.replace("AT2".to_string(), None, Some(10800));

        assert_eq!(tokens.access_token(), Some("AT2"));
        assert!(tokens.refresh_token().is_none());
        assert_eq!(tokens.expires_in(), Some(10800));
    }

    #[test]
    fn test_empty_refresh_token_normalizes_to_none() {
        let mut tokens = TokenSet::new();
        tokens.replace("AT".to_string(), Some(String::new()), None);
        assert!(tokens.refresh_token().is_none());

        let stored = TokenSet::from_stored(Some(String::new()), Some(String::new()));
        assert!(stored.access_token().is_none());
        assert!(stored.refresh_token().is_none());
    }

    #[test]
    fn test_access_token_response_tolerates_missing_fields() {
        let response: AccessTokenResponse = serde_json::from_str(r#"{"access_token":"AT1"}"#).unwrap();
        assert_eq!(response.access_token.as_deref(), Some("AT1"));
        assert!(response.refresh_token.is_none());
        assert!(response.expires_in.is_none());
    }

    #[test]
    fn test_access_token_response_full() {
        let response: AccessTokenResponse = serde_json::from_str(
            r#"{"access_token":"AT2","refresh_token":"RT2","expires_in":21600,"scope":"offline_access"}"#,
        )
        .unwrap();
        assert_eq!(response.access_token.as_deref(), Some("AT2"));
        assert_eq!(response.refresh_token.as_deref(), Some("RT2"));
        assert_eq!(response.expires_in, Some(21600));
    }
}
