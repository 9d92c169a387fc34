//! HTTP client types for MercadoLibre API communication.
//!
//! This module provides the request-building pipeline between the
//! [`Meli`](crate::Meli) session and the network.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the dispatcher (URL/header/query/body assembly)
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: a request to be sent
//! - [`HttpResponse`]: the raw response for any HTTP status
//! - [`HttpMethod`]: the five supported verbs
//! - [`HttpTransport`]: the injected transport capability
//! - [`ReqwestTransport`]: the default reqwest-backed transport
//!
//! # Error Semantics
//!
//! The dispatcher never raises for HTTP-level failure: a 403 or 500 comes
//! back as an ordinary [`HttpResponse`] with that status. Only
//! network-level problems surface as [`TransportError`]. The OAuth flows
//! layer their own stricter semantics on top of this.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest};
