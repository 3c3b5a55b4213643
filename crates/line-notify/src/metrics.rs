//! Request metrics
//!
//! Emitted through the `metrics` facade. Without an installed recorder every
//! call is a no-op, so embedding applications opt in by installing one.

/// Outcome label for a finished call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    ApiError,
    NoResponse,
    RequestError,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::ApiError => "api_error",
            Outcome::NoResponse => "no_response",
            Outcome::RequestError => "request_error",
        }
    }
}

/// Record one finished call against `endpoint` (e.g. "notify").
pub fn record_request(endpoint: &'static str, outcome: Outcome, duration_secs: f64) {
    metrics::counter!("line_notify_requests_total", "endpoint" => endpoint, "outcome" => outcome.as_str())
        .increment(1);
    metrics::histogram!("line_notify_request_duration_seconds", "endpoint" => endpoint)
        .record(duration_secs);
}
