//! CLI configuration file
//!
//! Precedence per credential: config file > `LINE_NOTIFY_*` env vars (applied
//! by the library). The client secret is never stored in the TOML directly;
//! it comes from `client_secret_file` or `LINE_NOTIFY_CLIENT_SECRET`.

use common::Secret;
use line_notify::ClientOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "line-notify.toml";

/// Env var naming the config file when `--config` is not given.
pub const CONFIG_PATH_ENV: &str = "LINE_NOTIFY_CONFIG";

/// Root configuration
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// OAuth client credentials
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub redirect_uri: Option<String>,
    /// File holding the client secret
    #[serde(default)]
    pub client_secret_file: Option<PathBuf>,
    #[serde(skip)]
    pub client_secret: Option<Secret<String>>,
}

/// HTTP transport settings
#[derive(Debug, Default, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout; the transport default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load and validate a TOML config file, reading the secret file if set.
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        if let Some(uri) = &config.credentials.redirect_uri
            && !uri.starts_with("http://")
            && !uri.starts_with("https://")
        {
            return Err(common::Error::Config(format!(
                "redirect_uri must start with http:// or https://, got: {uri}"
            )));
        }

        if config.http.timeout_secs == Some(0) {
            return Err(common::Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if let Some(ref secret_file) = config.credentials.client_secret_file {
            config.credentials.client_secret = Secret::from_file(secret_file).map_err(|e| {
                common::Error::Config(format!(
                    "failed to read client_secret_file {}: {e}",
                    secret_file.display()
                ))
            })?;
        }

        Ok(config)
    }

    /// Load `path`, or fall back to an empty config when the file is the
    /// implicit default and does not exist.
    pub fn load_or_default(path: &Path, explicit: bool) -> common::Result<Self> {
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Resolve config file path from CLI arg or LINE_NOTIFY_CONFIG env var.
    ///
    /// The flag reports whether the path was asked for explicitly.
    pub fn resolve_path(cli_path: Option<&str>) -> (PathBuf, bool) {
        if let Some(p) = cli_path {
            return (PathBuf::from(p), true);
        }
        if let Ok(p) = std::env::var(CONFIG_PATH_ENV) {
            return (PathBuf::from(p), true);
        }
        (PathBuf::from(DEFAULT_CONFIG_FILE), false)
    }

    /// Explicit client options; unset fields fall back to the environment.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            client_id: self.credentials.client_id.clone(),
            client_secret: self.credentials.client_secret.clone(),
            redirect_uri: self.credentials.redirect_uri.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.http.timeout_secs.map(Duration::from_secs)
    }
}
