use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::classify::TransportFailure;
use crate::model::{ProviderPayload, WeatherQuery};

use super::WeatherFetcher;

/// Default endpoint for current-weather lookups.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeather implementation of [`WeatherFetcher`].
///
/// Credentials and endpoint are opaque strings fixed at construction.
#[derive(Debug, Clone)]
pub struct OpenWeatherFetcher {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherFetcher {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    fn query_pairs(&self, query: &WeatherQuery) -> Vec<(&'static str, String)> {
        match query {
            WeatherQuery::City { name } => vec![
                ("q", name.clone()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ],
            WeatherQuery::Coordinates { latitude, longitude } => vec![
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ],
        }
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherFetcher {
    async fn fetch(&self, query: &WeatherQuery) -> Result<ProviderPayload, TransportFailure> {
        debug!(url = %self.base_url, ?query, "Fetching current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&self.query_pairs(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportFailure::timeout()
                } else {
                    TransportFailure::connection()
                }
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            if e.is_timeout() { TransportFailure::timeout() } else { TransportFailure::connection() }
        })?;

        if !status.is_success() {
            return Err(TransportFailure::from_status(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|_| TransportFailure::other())
    }
}
