//! Mapping of transport and provider failures onto the domain taxonomy.

use crate::error::WeatherError;

/// How a fetch attempt failed at the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request timed out.
    Timeout,
    /// The connection could not be established or was dropped.
    Connection,
    /// Anything else, including undecodable response bodies.
    Other,
}

/// A failed fetch as reported by a [`crate::provider::WeatherFetcher`].
///
/// `status` and `body` are present when the provider answered with a
/// non-2xx response; connectivity failures carry only a `kind`.
#[derive(Debug, Clone)]
pub struct TransportFailure {
    pub status: Option<u16>,
    pub body: Option<String>,
    pub kind: FailureKind,
}

impl TransportFailure {
    /// Provider answered with a non-2xx status.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self { status: Some(status), body: Some(body.into()), kind: FailureKind::Other }
    }

    pub fn timeout() -> Self {
        Self { status: None, body: None, kind: FailureKind::Timeout }
    }

    pub fn connection() -> Self {
        Self { status: None, body: None, kind: FailureKind::Connection }
    }

    pub fn other() -> Self {
        Self { status: None, body: None, kind: FailureKind::Other }
    }
}

/// What the service should do about a failed fetch.
#[derive(Debug)]
pub enum FailureAction {
    /// Surface the error to the caller.
    Fail(WeatherError),
    /// Credentials are valid but not active yet. Answer from the mock
    /// provider instead of failing.
    UseMockData,
}

/// Classify a transport failure.
///
/// `context` names what was being looked up and ends up in the 404 message,
/// so city lookups pass the city and coordinate lookups pass a location
/// description. The mapping is otherwise identical for both query variants.
pub fn classify_failure(failure: &TransportFailure, context: &str) -> FailureAction {
    if let Some(status) = failure.status {
        return match status {
            404 => FailureAction::Fail(WeatherError::CityNotFound(context.to_string())),
            401 => FailureAction::UseMockData,
            _ => {
                let body = failure.body.as_deref().unwrap_or_default();
                FailureAction::Fail(WeatherError::ProviderError(format!("HTTP {status}: {body}")))
            }
        };
    }

    match failure.kind {
        FailureKind::Timeout | FailureKind::Connection => {
            FailureAction::Fail(WeatherError::NetworkError)
        }
        FailureKind::Other => {
            FailureAction::Fail(WeatherError::ProviderError("Unexpected error occurred".to_string()))
        }
    }
}
