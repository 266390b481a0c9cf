use crate::classify::TransportFailure;
use crate::model::{ProviderPayload, WeatherQuery};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Capability to fetch a raw provider payload for a query.
///
/// Implementations own transport concerns (request construction, TLS,
/// timeouts) and report failures as [`TransportFailure`] values; turning
/// those into domain errors is the classifier's job, not theirs.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<ProviderPayload, TransportFailure>;
}
