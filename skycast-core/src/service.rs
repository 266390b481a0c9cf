//! Request-scoped orchestration: validate, resolve, fetch, map.

use std::sync::Arc;

use tracing::warn;

use crate::classify::{FailureAction, classify_failure};
use crate::error::WeatherError;
use crate::mock::{mock_for_city, mock_for_coordinates};
use crate::model::{WeatherObservation, WeatherQuery};
use crate::provider::WeatherFetcher;
use crate::resolve::CityResolver;
use crate::response::{UnitStyle, map_observation, validate_payload};
use crate::validate::{validate_city_name, validate_city_digit_count, validate_coordinates};

/// Answers weather queries against a single provider.
///
/// Stateless per request; the resolver's reference list is the only shared
/// state and is never mutated. A single provider failure is terminal, there
/// are no retries at this layer.
#[derive(Debug, Clone)]
pub struct WeatherService {
    fetcher: Arc<dyn WeatherFetcher>,
    resolver: Arc<CityResolver>,
}

impl WeatherService {
    pub fn new(fetcher: Arc<dyn WeatherFetcher>, resolver: CityResolver) -> Self {
        Self { fetcher, resolver: Arc::new(resolver) }
    }

    /// Look up current weather by city name.
    pub async fn weather_by_city(&self, city: &str) -> Result<WeatherObservation, WeatherError> {
        validate_city_name(city)?;
        validate_city_digit_count(city)?;

        let resolved = self.resolver.resolve(city);
        let query = WeatherQuery::City { name: resolved };

        match self.fetcher.fetch(&query).await {
            Ok(payload) => {
                let valid = validate_payload(&payload, city)?;
                Ok(map_observation(&valid, UnitStyle::City))
            }
            Err(failure) => match classify_failure(&failure, city) {
                FailureAction::Fail(err) => Err(err),
                FailureAction::UseMockData => {
                    warn!(city, "API key not active yet, returning mock data");
                    Ok(mock_for_city(city))
                }
            },
        }
    }

    /// Look up current weather by coordinates.
    pub async fn weather_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherObservation, WeatherError> {
        validate_coordinates(lat, lon)?;

        let query = WeatherQuery::Coordinates { latitude: lat, longitude: lon };

        match self.fetcher.fetch(&query).await {
            Ok(payload) => {
                let context = format!("coordinates ({lat}, {lon})");
                let valid = validate_payload(&payload, &context)?;
                Ok(map_observation(&valid, UnitStyle::Coordinates))
            }
            Err(failure) => {
                let context = format!("Location at coordinates ({lat}, {lon})");
                match classify_failure(&failure, &context) {
                    FailureAction::Fail(err) => Err(err),
                    FailureAction::UseMockData => {
                        warn!(lat, lon, "API key not active yet, returning mock data");
                        Ok(mock_for_coordinates(lat, lon))
                    }
                }
            }
        }
    }
}
