//! Request dispatcher for MercadoLibre API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into a wire-ready [`TransportRequest`] (path
//! normalization, header merging, query encoding, body serialization)
//! and delegates execution to the injected [`HttpTransport`].

use std::collections::HashMap;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{HttpTransport, ReqwestTransport, TransportRequest};
use crate::config::MeliConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request dispatcher for the MercadoLibre API.
///
/// The client handles:
/// - Absolute URL construction from the configured API root
/// - Default headers (Accept, Content-Type, SDK User-Agent)
/// - Query parameter encoding
/// - JSON body serialization
///
/// It never interprets HTTP statuses: every completed round trip returns
/// the raw [`HttpResponse`], and only network-level failures are errors.
///
/// # Thread Safety
///
/// `HttpClient<T>` is `Send + Sync` whenever `T` is, making it safe to
/// share across async tasks.
#[derive(Debug)]
pub struct HttpClient<T = ReqwestTransport> {
    transport: T,
    api_root: String,
    default_headers: HashMap<String, String>,
}

impl HttpClient<ReqwestTransport> {
    /// Creates a client with the default reqwest transport.
    ///
    /// The transport honors the configuration's minimum TLS version.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &MeliConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::from_config(config))
    }
}

impl<T: HttpTransport> HttpClient<T> {
    /// Creates a client delegating to the given transport.
    #[must_use]
    pub fn with_transport(config: &MeliConfig, transport: T) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}MELI-RUST-SDK-{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            transport,
            api_root: config.api_root().to_string(),
            default_headers,
        }
    }

    /// Returns the API root this client dispatches against.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Returns the default headers applied to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the absolute request URL for a resource path.
    ///
    /// A leading `/` is added when missing, the API root is prepended, and
    /// the query parameters (if any) are percent-encoded and appended with
    /// keys in sorted order so the same logical request always produces
    /// the same URL.
    #[must_use]
    pub fn make_url(&self, path: &str, query: Option<&HashMap<String, String>>) -> String {
        let mut url = if path.starts_with('/') {
            format!("{}{path}", self.api_root)
        } else {
            format!("{}/{path}", self.api_root)
        };

        if let Some(query) = query {
            if !query.is_empty() {
                url.push('?');
                url.push_str(&encode_query(query));
            }
        }

        url
    }

    /// Dispatches a request through the transport and returns the raw response.
    ///
    /// The response is returned for every HTTP status, including 4xx and
    /// 5xx; callers inspect the status themselves.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only for network-level failures, which
    /// propagate unchanged from the transport.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.make_url(&request.path, request.query.as_ref());

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let body = request.body.as_ref().map(serde_json::Value::to_string);

        tracing::debug!(method = %request.http_method, %url, "dispatching request");

        self.transport
            .execute(TransportRequest {
                method: request.http_method,
                url,
                headers,
                body,
                timeout: request.timeout,
            })
            .await
    }
}

/// Percent-encodes query parameters with keys in sorted order.
fn encode_query(query: &HashMap<String, String>) -> String {
    let mut pairs: Vec<_> = query.iter().collect();
    pairs.sort_by_key(|(key, _)| key.as_str());
    pairs
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}
