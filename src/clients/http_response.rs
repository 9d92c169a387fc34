//! HTTP response type for the MercadoLibre API SDK.
//!
//! This module provides the [`HttpResponse`] type returned by the request
//! dispatcher for every completed HTTP round trip, successful or not.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// A raw HTTP response from the MercadoLibre API.
///
/// The dispatcher returns the response unmodified for every HTTP status,
/// including 4xx and 5xx; callers inspect [`status`](Self::status) (or
/// [`is_ok`](Self::is_ok)) themselves. The body is kept as the raw text the
/// server sent, with [`json`](Self::json) as an opt-in parse helper.
///
/// # Example
///
/// ```rust
/// use meli_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"id":"MLA123"}"#.to_string());
/// assert!(response.is_ok());
///
/// let body: serde_json::Value = response.json().unwrap();
/// assert_eq!(body["id"], "MLA123");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response from its parts.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the first value of the given header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Parses the body as JSON into the given type.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the body is not valid
    /// JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

// Verify HttpResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_status(status: u16) -> HttpResponse {
        HttpResponse::new(status, HashMap::new(), String::new())
    }

    #[test]
    fn test_is_ok_for_2xx_range() {
        assert!(response_with_status(200).is_ok());
        assert!(response_with_status(201).is_ok());
        assert!(response_with_status(299).is_ok());
        assert!(!response_with_status(199).is_ok());
        assert!(!response_with_status(301).is_ok());
        assert!(!response_with_status(403).is_ok());
        assert!(!response_with_status(500).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        let response = HttpResponse::new(200, headers, String::new());

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert!(response.header("x-missing").is_none());
    }

    #[test]
    fn test_json_parses_body() {
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            r#"{"nickname":"TEST_USER","site_id":"MLA"}"#.to_string(),
        );

        let body: serde_json::Value = response.json().unwrap();
        assert_eq!(body["nickname"], "TEST_USER");
    }

    #[test]
    fn test_json_fails_on_non_json_body() {
        let response = HttpResponse::new(502, HashMap::new(), "Bad Gateway".to_string());
        let result: Result<serde_json::Value, _> = response.json();
        assert!(result.is_err());
    }
}
