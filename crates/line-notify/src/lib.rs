//! LINE Notify client library
//!
//! Wraps the LINE Notify OAuth flow and messaging API. Every network
//! operation is one HTTP request; the client keeps no state beyond its
//! credentials, so tokens are the caller's to store.
//!
//! Flow:
//! 1. Caller generates a CSRF value with `generate_state()`
//! 2. User is redirected to `NotifyClient::authorize_url()`
//! 3. Callback code is exchanged via `NotifyClient::exchange_code()`
//! 4. Messages are sent with `NotifyClient::notify()`
//! 5. `NotifyClient::status()` and `NotifyClient::revoke()` manage the token

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod metrics;
pub mod notification;
pub mod oauth;
pub mod types;

pub use client::{Endpoints, NotifyClient, NotifyClientBuilder};
pub use config::{ClientOptions, CredentialSource, Credentials, EnvSource};
pub use constants::*;
pub use error::{Error, Result};
pub use notification::Notification;
pub use oauth::{build_authorization_url, generate_state};
pub use types::{NotifyResponse, TargetType, TokenStatus};
