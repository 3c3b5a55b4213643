//! The SDK's single error type
//!
//! Every variant displays as a plain human-readable message, so callers that
//! only care about the text can use `to_string()`. The variants exist so that
//! callers who do care can tell a rejected token from a network outage.

/// Message used when a request went out but nothing came back.
pub const NO_RESPONSE_MESSAGE: &str = "No response received from LINE servers";

/// Errors from LINE Notify client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client ID, client secret or redirect URI could not be resolved.
    #[error("Credentials undefined")]
    CredentialsUndefined,

    /// Caller input rejected before any request was made.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request was sent but no response arrived.
    #[error("No response received from LINE servers")]
    NoResponse,

    /// The request could not be built or the response could not be decoded.
    #[error("{0}")]
    Request(String),
}

impl Error {
    /// HTTP status reported by the service, if the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a transport error. Responses with error statuses never reach
    /// here; they are mapped from the body in `client::read_error`.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            Error::NoResponse
        } else {
            Error::Request(err.to_string())
        }
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
