//! The injected HTTP transport capability.
//!
//! The request dispatcher does not talk to the network itself; it hands a
//! fully built [`TransportRequest`] to an [`HttpTransport`] implementation.
//! Production code uses [`ReqwestTransport`]; tests substitute spies that
//! record requests and return canned responses.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;
use crate::config::{MeliConfig, MinTlsVersion};

/// A fully built request, ready for the wire.
///
/// The dispatcher has already normalized the path into an absolute URL,
/// encoded the query string into it, merged the headers, and serialized
/// the body; the transport only executes.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, query string included.
    pub url: String,
    /// The merged request headers.
    pub headers: HashMap<String, String>,
    /// The serialized JSON body, if any.
    pub body: Option<String>,
    /// Per-request timeout, if any.
    pub timeout: Option<Duration>,
}

/// Capability interface over the underlying HTTP client.
///
/// Implementations execute one request and return the raw response, failing
/// with [`TransportError`] only for network-level problems (connection
/// refused, DNS failure, timeout). HTTP error statuses are *not* transport
/// failures; they come back as ordinary responses.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use meli_api::{HttpResponse, HttpTransport, TransportError, TransportRequest};
/// use std::collections::HashMap;
///
/// struct AlwaysOk;
///
/// #[async_trait]
/// impl HttpTransport for AlwaysOk {
///     async fn execute(&self, _request: TransportRequest)
///         -> Result<HttpResponse, TransportError>
///     {
///         Ok(HttpResponse::new(200, HashMap::new(), "{}".to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network-level failure.
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError>;
}

/// The default transport, backed by a pooled `reqwest` client with rustls.
///
/// Connection pooling and TLS negotiation are handled internally by
/// reqwest and are opaque to the SDK core.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with default TLS settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_tls_version(None)
    }

    /// Creates a transport enforcing a minimum TLS version.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_min_tls_version(min_tls_version: Option<MinTlsVersion>) -> Self {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(version) = min_tls_version {
            let version = match version {
                MinTlsVersion::Tls1_2 => reqwest::tls::Version::TLS_1_2,
                MinTlsVersion::Tls1_3 => reqwest::tls::Version::TLS_1_3,
            };
            builder = builder.min_tls_version(version);
        }
        let client = builder.build().expect("Failed to create HTTP client");
        Self { client }
    }

    /// Creates a transport honoring the configuration's TLS floor.
    #[must_use]
    pub fn from_config(config: &MeliConfig) -> Self {
        Self::with_min_tls_version(config.min_tls_version())
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
            HttpMethod::Options => Self::OPTIONS,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let res = builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.unwrap_or_default();

        Ok(HttpResponse::new(status, headers, body))
    }
}

// Verify transport types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportRequest>();
    assert_send_sync::<ReqwestTransport>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_maps_to_reqwest_method() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Options),
            reqwest::Method::OPTIONS
        );
    }

    #[test]
    fn test_default_transport_construction() {
        let transport = ReqwestTransport::new();
        // Construction succeeding is the test; TLS setup panics otherwise.
        let _ = transport;
    }

    #[test]
    fn test_transport_with_tls_floor() {
        let transport = ReqwestTransport::with_min_tls_version(Some(MinTlsVersion::Tls1_2));
        let _ = transport;
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
        assert_send_sync::<TransportRequest>();
    }
}
