//! LINE Notify API client
//!
//! Each operation issues exactly one HTTP request. Failures are mapped to
//! `Error` in priority order:
//! 1. a response arrived with an error status: the body's `message`
//! 2. the request went out but nothing came back: `Error::NoResponse`
//! 3. anything else: the underlying error's own message
//!
//! The client holds only immutable configuration plus a `reqwest::Client`,
//! so it is cheap to clone and safe to share across tasks.

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ClientOptions, CredentialSource, Credentials, EnvSource};
use crate::constants::{API_BASE_URI, OAUTH_BASE_URI};
use crate::error::{Error, Result};
use crate::metrics::{Outcome, record_request};
use crate::notification::{Notification, validate};
use crate::oauth::build_authorization_url;
use crate::types::{ErrorBody, NotifyResponse, TokenResponse, TokenStatus};

/// Base URIs of the authorization server and the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub oauth_base: String,
    pub api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            oauth_base: OAUTH_BASE_URI.to_string(),
            api_base: API_BASE_URI.to_string(),
        }
    }
}

/// Builder for `NotifyClient`.
#[derive(Debug, Default)]
pub struct NotifyClientBuilder {
    options: ClientOptions,
    endpoints: Endpoints,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl NotifyClientBuilder {
    /// Override the base URIs. Production code never needs this.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Per-request timeout. Ignored when an HTTP client is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a prebuilt HTTP client (shared connection pool, custom TLS, ...).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build, falling back to `LINE_NOTIFY_*` environment variables.
    pub fn build(self) -> Result<NotifyClient> {
        self.build_with(&EnvSource)
    }

    /// Build, falling back to `source` for credentials not given explicitly.
    pub fn build_with(self, source: &dyn CredentialSource) -> Result<NotifyClient> {
        let credentials = Credentials::resolve(self.options, source)?;

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| Error::Request(format!("building HTTP client: {e}")))?
            }
        };

        debug!(
            client_id = %credentials.client_id,
            oauth_base = %self.endpoints.oauth_base,
            api_base = %self.endpoints.api_base,
            "LINE Notify client configured"
        );

        Ok(NotifyClient {
            credentials,
            endpoints: self.endpoints,
            http,
        })
    }
}

/// Client for the LINE Notify OAuth flow and messaging API.
#[derive(Debug, Clone)]
pub struct NotifyClient {
    credentials: Credentials,
    endpoints: Endpoints,
    http: reqwest::Client,
}

impl NotifyClient {
    /// Create a client, filling missing options from the environment.
    ///
    /// Fails with `Error::CredentialsUndefined` if the client ID, client
    /// secret or redirect URI cannot be resolved.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::builder(options).build()
    }

    /// Create a client with an explicit credential fallback.
    pub fn with_source(options: ClientOptions, source: &dyn CredentialSource) -> Result<Self> {
        Self::builder(options).build_with(source)
    }

    pub fn builder(options: ClientOptions) -> NotifyClientBuilder {
        NotifyClientBuilder {
            options,
            ..NotifyClientBuilder::default()
        }
    }

    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    pub fn redirect_uri(&self) -> &str {
        &self.credentials.redirect_uri
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// URL to send the user to for consent. Pure; performs no I/O.
    pub fn authorize_url(&self, state: &str, form_post: bool) -> String {
        build_authorization_url(
            &self.endpoints.oauth_base,
            &self.credentials.client_id,
            &self.credentials.redirect_uri,
            state,
            form_post,
        )
    }

    /// Exchange an authorization code for an access token.
    ///
    /// The token is returned as-is; storing it is the caller's job.
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        let form = reqwest::multipart::Form::new()
            .text("grant_type", "authorization_code")
            .text("code", code.to_owned())
            .text("redirect_uri", self.credentials.redirect_uri.clone())
            .text("client_id", self.credentials.client_id.clone())
            .text(
                "client_secret",
                self.credentials.client_secret.expose().clone(),
            );

        let request = self
            .http
            .post(format!("{}/token", self.endpoints.oauth_base))
            .multipart(form);

        let token: TokenResponse = self.execute_json("token", request).await?;
        Ok(token.access_token)
    }

    /// Query whether `token` is valid and what it is bound to.
    pub async fn status(&self, token: &str) -> Result<TokenStatus> {
        let request = self
            .http
            .get(format!("{}/status", self.endpoints.api_base))
            .bearer_auth(token);

        self.execute_json("status", request).await
    }

    /// Revoke `token`. Returns the response body unchanged (`Null` if empty).
    pub async fn revoke(&self, token: &str) -> Result<serde_json::Value> {
        let request = self
            .http
            .post(format!("{}/revoke", self.endpoints.api_base))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("");

        self.execute("revoke", request, |body| {
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(serde_json::Value::Null);
            }
            serde_json::from_slice(body).map_err(|e| Error::Request(e.to_string()))
        })
        .await
    }

    /// Send a notification to the user or group `token` is bound to.
    ///
    /// Token and message are checked before any request is made.
    pub async fn notify(
        &self,
        token: &str,
        notification: &Notification,
    ) -> Result<NotifyResponse> {
        validate(token, notification)?;

        let request = self
            .http
            .post(format!("{}/notify", self.endpoints.api_base))
            .bearer_auth(token)
            .multipart(notification.to_form());

        self.execute_json("notify", request).await
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        self.execute(endpoint, request, |body| {
            serde_json::from_slice(body).map_err(|e| Error::Request(e.to_string()))
        })
        .await
    }

    /// Send `request`, map transport and status failures, then decode the
    /// success body with `decode`.
    async fn execute<T>(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
        decode: impl FnOnce(&[u8]) -> Result<T>,
    ) -> Result<T> {
        let started = Instant::now();
        let result = send(endpoint, request)
            .await
            .and_then(|body| decode(body.as_slice()));
        let elapsed = started.elapsed().as_secs_f64();

        let outcome = match &result {
            Ok(_) => Outcome::Ok,
            Err(Error::Api { .. }) => Outcome::ApiError,
            Err(Error::NoResponse) => Outcome::NoResponse,
            Err(_) => Outcome::RequestError,
        };
        record_request(endpoint, outcome, elapsed);
        if let Err(e) = &result {
            warn!(endpoint, status = ?e.status(), error = %e, "LINE Notify call failed");
        }
        result
    }
}

/// Issue the request and return the success body bytes.
async fn send(endpoint: &'static str, request: reqwest::RequestBuilder) -> Result<Vec<u8>> {
    debug!(endpoint, "sending LINE Notify request");
    let response = request.send().await.map_err(Error::from_transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(read_error(response).await);
    }

    debug!(endpoint, status = status.as_u16(), "LINE Notify request succeeded");
    let body = response.bytes().await.map_err(Error::from_transport)?;
    Ok(body.to_vec())
}

/// Build `Error::Api` from an error response, preferring the body's message.
async fn read_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let body = response.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("Request failed with status code {status}"));
    Error::Api { status, message }
}
