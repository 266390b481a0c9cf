//! Response-shape validation and mapping to the domain result.

use crate::error::WeatherError;
use crate::model::{MainData, ProviderPayload, WeatherObservation, WindData};

/// Presentation units applied when mapping a payload.
///
/// City lookups and coordinate lookups historically format their results
/// differently. Both conventions are kept exactly as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStyle {
    /// `{:.1}C` temperatures, wind in `km/h`.
    City,
    /// `{:.1}°C` temperatures, wind in `m/s`.
    Coordinates,
}

/// A payload whose required fields are all present.
///
/// Produced by [`validate_payload`]; borrowing from the raw payload keeps
/// the mapping step free of re-checks.
#[derive(Debug)]
pub struct ValidPayload<'a> {
    pub name: &'a str,
    pub main: &'a MainData,
    pub description: &'a str,
    pub wind: &'a WindData,
}

/// Check a parsed payload for the fields the mapping needs.
///
/// Checks run in a fixed order and stop at the first missing field. Each
/// failure names the field and the lookup context.
pub fn validate_payload<'a>(
    payload: &'a ProviderPayload,
    context: &str,
) -> Result<ValidPayload<'a>, WeatherError> {
    let main = payload
        .main
        .as_ref()
        .ok_or_else(|| WeatherError::InvalidResponse(format!("Missing temperature data for {context}")))?;

    let description = payload
        .weather
        .as_ref()
        .and_then(|list| list.first())
        .map(|w| w.description.as_str())
        .ok_or_else(|| {
            WeatherError::InvalidResponse(format!("Missing weather description for {context}"))
        })?;

    let wind = payload
        .wind
        .as_ref()
        .ok_or_else(|| WeatherError::InvalidResponse(format!("Missing wind data for {context}")))?;

    let name = payload
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| WeatherError::InvalidResponse("Missing city name in response".to_string()))?;

    Ok(ValidPayload { name, main, description, wind })
}

/// Map a validated payload to the domain result. Pure and idempotent.
pub fn map_observation(payload: &ValidPayload<'_>, units: UnitStyle) -> WeatherObservation {
    let (temperature, feels_like, wind_speed) = match units {
        UnitStyle::City => (
            format!("{:.1}C", payload.main.temp),
            format!("{:.1}C", payload.main.feels_like),
            format!("{:.1} km/h", payload.wind.speed),
        ),
        UnitStyle::Coordinates => (
            format!("{:.1}°C", payload.main.temp),
            format!("{:.1}°C", payload.main.feels_like),
            format!("{:.1} m/s", payload.wind.speed),
        ),
    };

    WeatherObservation {
        city: payload.name.to_string(),
        temperature,
        description: payload.description.to_string(),
        humidity: format!("{}%", payload.main.humidity),
        wind_speed,
        feels_like,
    }
}
