//! LINE Notify endpoints and protocol constants
//!
//! The base URIs are the production hosts. The authorization server
//! (`notify-bot.line.me`) serves the consent page and the token endpoint;
//! the API server (`notify-api.line.me`) serves status, revoke and notify.

/// Authorization server base (authorize + token endpoints)
pub const OAUTH_BASE_URI: &str = "https://notify-bot.line.me/oauth";

/// API server base (status, revoke, notify)
pub const API_BASE_URI: &str = "https://notify-api.line.me/api";

/// The only scope LINE Notify grants.
pub const SCOPE: &str = "notify";

/// Upper bound on `message` length, counted in UTF-16 code units the way
/// the service counts it (emoji outside the BMP take two).
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Environment fallback for the client ID
pub const ENV_CLIENT_ID: &str = "LINE_NOTIFY_CLIENT_ID";

/// Environment fallback for the client secret
pub const ENV_CLIENT_SECRET: &str = "LINE_NOTIFY_CLIENT_SECRET";

/// Environment fallback for the redirect URI
pub const ENV_REDIRECT_URI: &str = "LINE_NOTIFY_REDIRECT_URI";
