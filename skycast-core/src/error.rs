use thiserror::Error;

/// Domain-level failure categories surfaced to callers.
///
/// The provider's 401 "key not active yet" response is deliberately absent:
/// it is not a failure, it routes the request to the mock fallback.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Malformed city string or out-of-range coordinates. Raised before any
    /// external call is made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The city (or coordinate location) could not be resolved, either
    /// locally or by the provider.
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The provider answered but the payload is missing required fields.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Connectivity or timeout failure while talking to the provider.
    #[error("Network error while fetching weather data")]
    NetworkError,

    /// Any other provider-side failure, with a human-readable message.
    #[error("Weather API error: {0}")]
    ProviderError(String),
}
