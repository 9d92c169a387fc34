//! The MercadoLibre session and top-level client.
//!
//! This module provides the [`Meli`] type, which owns one set of
//! application credentials, the session's token state, and the request
//! dispatcher. It exposes the OAuth flows and the five resource verbs.

use std::collections::HashMap;

use crate::auth::oauth::OAuthError;
use crate::auth::{AccessTokenResponse, TokenSet};
use crate::clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    TransportError,
};
use crate::config::{MeliConfig, Site, OAUTH_TOKEN_PATH};

/// An authenticated (or not-yet-authenticated) MercadoLibre session.
///
/// One `Meli` instance corresponds to one credential set against one
/// country site. The session starts unauthenticated; running
/// [`authorize`](Self::authorize) or
/// [`refresh_access_token`](Self::refresh_access_token) replaces the whole
/// token state in one step. Token fields are never settable directly.
///
/// # Error Semantics
///
/// The OAuth operations fail loudly ([`OAuthError`]); the resource verbs
/// (`get`, `post`, `put`, `delete`, `options`) never fail on HTTP status:
/// they return the raw [`HttpResponse`] for 4xx/5xx alike and only fail
/// with [`TransportError`] when no response was obtained at all.
///
/// # Concurrency
///
/// Separate sessions are fully independent. The token-mutating operations
/// take `&mut self`, so concurrent token exchange on one instance is ruled
/// out at compile time; sharing a session across tasks is the caller's
/// responsibility to serialize. No internal locking is provided.
///
/// # Example
///
/// ```rust,ignore
/// use meli_api::{ClientId, ClientSecret, Meli, MeliConfig, Site};
///
/// let config = MeliConfig::builder()
///     .client_id(ClientId::new("app-id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .site(Site::Brazil)
///     .build()?;
/// let mut meli = Meli::new(config);
///
/// // 1. Redirect the user:
/// let url = meli.auth_url("https://myapp.example.com/callback");
///
/// // 2. Exchange the callback code:
/// let access_token = meli.authorize(&code, "https://myapp.example.com/callback").await?;
///
/// // 3. Call the API:
/// let response = meli.get("/users/me", None).await?;
/// assert_eq!(response.status, 200);
/// ```
#[derive(Debug)]
pub struct Meli<T = ReqwestTransport> {
    config: MeliConfig,
    tokens: TokenSet,
    http: HttpClient<T>,
}

impl Meli<ReqwestTransport> {
    /// Creates a session with the default reqwest transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: MeliConfig) -> Self {
        let http = HttpClient::new(&config);
        Self {
            config,
            tokens: TokenSet::new(),
            http,
        }
    }
}

impl<T: HttpTransport> Meli<T> {
    /// Creates a session delegating to the given transport.
    #[must_use]
    pub fn with_transport(config: MeliConfig, transport: T) -> Self {
        let http = HttpClient::with_transport(&config, transport);
        Self {
            config,
            tokens: TokenSet::new(),
            http,
        }
    }

    /// Resumes a session from previously persisted tokens.
    ///
    /// Consumes and returns the session builder-style; this is the only
    /// way to seed tokens from outside the two OAuth operations.
    #[must_use]
    pub fn with_tokens(
        mut self,
        access_token: Option<String>,
        refresh_token: Option<String>,
    ) -> Self {
        self.tokens = TokenSet::from_stored(access_token, refresh_token);
        self
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &MeliConfig {
        &self.config
    }

    /// Returns the country site this session authorizes against.
    #[must_use]
    pub const fn site(&self) -> Site {
        self.config.site()
    }

    /// Returns the current token state.
    #[must_use]
    pub const fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Returns the current access token, if one is held.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.tokens.access_token()
    }

    /// Returns the current refresh token, if one is held.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.tokens.refresh_token()
    }

    /// Returns the reported access token lifetime in seconds, if known.
    #[must_use]
    pub fn expires_in(&self) -> Option<u64> {
        self.tokens.expires_in()
    }

    // === OAuth flows ===

    /// Builds the authorization URL to redirect a user to.
    ///
    /// Pure function: no network call, no state change. The URL points at
    /// the country site's authorization server with `client_id`,
    /// `response_type=code`, and the percent-encoded redirect URI.
    ///
    /// # Example
    ///
    /// ```rust
    /// use meli_api::{ClientId, ClientSecret, Meli, MeliConfig, Site};
    ///
    /// let config = MeliConfig::builder()
    ///     .client_id(ClientId::new("123").unwrap())
    ///     .client_secret(ClientSecret::new("secret").unwrap())
    ///     .site(Site::Argentina)
    ///     .build()
    ///     .unwrap();
    /// let meli = Meli::new(config);
    ///
    /// let url = meli.auth_url("https://myapp.example.com/callback");
    /// assert!(url.starts_with("https://auth.mercadolibre.com.ar/authorization?"));
    /// assert!(url.contains("response_type=code"));
    /// ```
    #[must_use]
    pub fn auth_url(&self, redirect_uri: &str) -> String {
        let params = [
            ("client_id", self.config.client_id().as_ref()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
        ];
        let query = params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}/authorization?{query}", self.site().auth_base())
    }

    /// Exchanges an authorization code for tokens.
    ///
    /// Issues a `grant_type=authorization_code` request to the token
    /// endpoint. On success the session's whole token state is replaced in
    /// one step and the new access token is returned. A response without a
    /// `refresh_token` is accepted; the application simply was not granted
    /// offline access, and the stored refresh token becomes absent.
    ///
    /// # Errors
    ///
    /// - [`OAuthError::TokenRequestFailed`] on a non-2xx response (not retried)
    /// - [`OAuthError::MissingField`] if a 2xx response lacks `access_token`
    /// - [`OAuthError::MalformedResponse`] if a 2xx body is not valid JSON
    /// - [`OAuthError::Transport`] on network failure
    ///
    /// The session's token state is untouched on any failure.
    pub async fn authorize(
        &mut self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<String, OAuthError> {
        tracing::debug!(site = %self.site(), "exchanging authorization code");

        let mut params = self.client_credential_params("authorization_code");
        params.insert("code".to_string(), code.to_string());
        params.insert("redirect_uri".to_string(), redirect_uri.to_string());

        let token_response = self.token_request(params).await?;

        let access_token = token_response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(OAuthError::MissingField {
                field: "access_token",
            })?;

        self.tokens.replace(
            access_token.clone(),
            token_response.refresh_token,
            token_response.expires_in,
        );

        Ok(access_token)
    }

    /// Rotates the token pair using the stored refresh token.
    ///
    /// Fails before any network activity if no refresh token is held.
    /// Unlike the code exchange, a successful response must carry the full
    /// replacement triple of `access_token`, `refresh_token`, and
    /// `expires_in`, because a refreshed session without a forward refresh
    /// token would leave the caller with no way to renew again.
    ///
    /// # Errors
    ///
    /// - [`OAuthError::MissingRefreshToken`] if no refresh token is held (no network call)
    /// - [`OAuthError::TokenRequestFailed`] on a non-2xx response (not retried)
    /// - [`OAuthError::MissingField`] if a 2xx response lacks any of the triple
    /// - [`OAuthError::MalformedResponse`] if a 2xx body is not valid JSON
    /// - [`OAuthError::Transport`] on network failure
    ///
    /// The session's token state is untouched on any failure.
    pub async fn refresh_access_token(&mut self) -> Result<String, OAuthError> {
        let refresh_token = self
            .tokens
            .refresh_token()
            .ok_or(OAuthError::MissingRefreshToken)?
            .to_string();

        tracing::debug!(site = %self.site(), "refreshing access token");

        let mut params = self.client_credential_params("refresh_token");
        params.insert("refresh_token".to_string(), refresh_token);

        let token_response = self.token_request(params).await?;

        let access_token = token_response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(OAuthError::MissingField {
                field: "access_token",
            })?;
        let new_refresh_token =
            token_response
                .refresh_token
                .ok_or(OAuthError::MissingField {
                    field: "refresh_token",
                })?;
        let expires_in = token_response
            .expires_in
            .ok_or(OAuthError::MissingField { field: "expires_in" })?;

        self.tokens.replace(
            access_token.clone(),
            Some(new_refresh_token),
            Some(expires_in),
        );

        Ok(access_token)
    }

    /// Builds the shared client-credential parameters for a token request.
    fn client_credential_params(&self, grant_type: &str) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert("grant_type".to_string(), grant_type.to_string());
        params.insert(
            "client_id".to_string(),
            self.config.client_id().as_ref().to_string(),
        );
        params.insert(
            "client_secret".to_string(),
            self.config.client_secret().as_ref().to_string(),
        );
        params
    }

    /// POSTs to the token endpoint and parses a successful response.
    ///
    /// The grant parameters ride in the URL-encoded query string; the
    /// headers are the dispatcher's JSON defaults.
    async fn token_request(
        &self,
        params: HashMap<String, String>,
    ) -> Result<AccessTokenResponse, OAuthError> {
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            path: OAUTH_TOKEN_PATH.to_string(),
            body: None,
            query: Some(params),
            extra_headers: None,
            timeout: None,
        };

        let response = self.http.request(request).await?;

        if !response.is_ok() {
            return Err(OAuthError::TokenRequestFailed {
                status: response.status,
                body: response.body,
            });
        }

        response
            .json::<AccessTokenResponse>()
            .map_err(|e| OAuthError::MalformedResponse {
                reason: e.to_string(),
            })
    }

    // === Resource verbs ===

    /// Sends a GET request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only on network-level failure; any HTTP
    /// status comes back as an `Ok` response.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the given resource path.
    ///
    /// A `None` body sends no payload.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only on network-level failure.
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Post, path, body, query).await
    }

    /// Sends a PUT request to the given resource path.
    ///
    /// A `None` body sends no payload.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only on network-level failure.
    pub async fn put(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Put, path, body, query).await
    }

    /// Sends a DELETE request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only on network-level failure.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Sends an OPTIONS request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only on network-level failure.
    pub async fn options(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Options, path, None, query)
            .await
    }

    /// Sends a fully built request (extra headers, timeout, any verb).
    ///
    /// Use [`HttpRequest::builder`] for requests the convenience verbs
    /// cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only on network-level failure.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.http.request(request).await
    }

    /// Internal helper shared by the convenience verbs.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        let request = HttpRequest {
            http_method: method,
            path: path.to_string(),
            body,
            query,
            extra_headers: None,
            timeout: None,
        };
        self.http.request(request).await
    }
}
