//! Credential resolution
//!
//! Each credential resolves as: explicit option, then the credential source
//! (the process environment by default), then missing. Empty strings count as
//! missing at both levels.

use common::Secret;

use crate::constants::{ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_REDIRECT_URI};
use crate::error::{Error, Result};

/// Explicit construction values. Any field left `None` (or empty) falls back
/// to the credential source.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub client_id: Option<String>,
    pub client_secret: Option<Secret<String>>,
    pub redirect_uri: Option<String>,
}

impl ClientOptions {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(Secret::new(client_secret.into())),
            redirect_uri: Some(redirect_uri.into()),
        }
    }
}

/// Fallback lookup for credentials not given explicitly.
pub trait CredentialSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads `LINE_NOTIFY_*` variables from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl CredentialSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> CredentialSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Fully resolved client credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub redirect_uri: String,
}

impl Credentials {
    /// Resolve all three credentials, failing if any is missing.
    pub fn resolve(options: ClientOptions, source: &dyn CredentialSource) -> Result<Self> {
        let client_id = pick(options.client_id, source, ENV_CLIENT_ID);
        let client_secret = options
            .client_secret
            .filter(|s| !s.expose().is_empty())
            .or_else(|| pick(None, source, ENV_CLIENT_SECRET).map(Secret::new));
        let redirect_uri = pick(options.redirect_uri, source, ENV_REDIRECT_URI);

        match (client_id, client_secret, redirect_uri) {
            (Some(client_id), Some(client_secret), Some(redirect_uri)) => Ok(Self {
                client_id,
                client_secret,
                redirect_uri,
            }),
            _ => Err(Error::CredentialsUndefined),
        }
    }
}

fn pick(explicit: Option<String>, source: &dyn CredentialSource, key: &str) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or_else(|| source.get(key).filter(|v| !v.is_empty()))
}
