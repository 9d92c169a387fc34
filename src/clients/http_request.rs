//! HTTP request types for the MercadoLibre API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the MercadoLibre API.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the MercadoLibre API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
    /// HTTP OPTIONS method for endpoint discovery.
    Options,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
            Self::Options => write!(f, "options"),
        }
    }
}

/// An HTTP request to be sent to the MercadoLibre API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder
/// pattern. The path is relative to the API root; a leading `/` is optional
/// and added during dispatch when missing. Bodies are optional on every
/// verb and are serialized to JSON when present.
///
/// # Example
///
/// ```rust
/// use meli_api::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// // GET request with query parameters
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/items/MLA123")
///     .query_param("attributes", "price")
///     .build()
///     .unwrap();
///
/// // POST request with a JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/items")
///     .body(json!({"title": "Item", "price": 289}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The resource path, relative to the API root.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers, overriding defaults on key collision.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Per-request timeout passed through to the transport.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::QueryInPath`] if the path embeds
    /// its own query string.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.contains('?') {
            return Err(InvalidHttpRequestError::QueryInPath {
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    timeout: Option<Duration>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
            timeout: None,
        }
    }

    /// Sets the request body. It is serialized to JSON during dispatch.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets a per-request timeout, passed through to the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            timeout: self.timeout,
        };
        request.verify()?;
        Ok(request)
    }
}
