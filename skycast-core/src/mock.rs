//! Deterministic stand-in weather data.
//!
//! Used only when the provider rejects the API key as not active yet
//! (HTTP 401). Pure functions over fixed literals, so the output for a
//! given input never changes.

use crate::model::WeatherObservation;

fn observation(
    city: &str,
    temperature: &str,
    description: &str,
    humidity: &str,
    wind_speed: &str,
    feels_like: &str,
) -> WeatherObservation {
    WeatherObservation {
        city: city.to_string(),
        temperature: temperature.to_string(),
        description: description.to_string(),
        humidity: humidity.to_string(),
        wind_speed: wind_speed.to_string(),
        feels_like: feels_like.to_string(),
    }
}

/// Mock observation for a city lookup.
///
/// Case-insensitive substring match in fixed priority order; exactly one
/// branch fires. The label is the caller-supplied city string.
pub fn mock_for_city(city: &str) -> WeatherObservation {
    let lower = city.to_lowercase();

    if lower.contains("london") {
        observation(city, "15.2C", "Rainy", "85%", "8.5 km/h", "13.1C")
    } else if lower.contains("tokyo") {
        observation(city, "28.5C", "Sunny", "45%", "12.3 km/h", "31.2C")
    } else if lower.contains("paris") {
        observation(city, "18.7C", "Cloudy", "72%", "6.8 km/h", "17.9C")
    } else {
        observation(city, "22.0C", "Partly cloudy", "60%", "10.0 km/h", "24.5C")
    }
}

/// Mock observation for a coordinate lookup.
///
/// Banded by latitude only; longitude is ignored. The label is a fixed
/// placeholder rather than anything derived from the coordinates.
pub fn mock_for_coordinates(lat: f64, _lon: f64) -> WeatherObservation {
    let location_name = "Your Location";

    if lat > 50.0 {
        observation(location_name, "8.5°C", "Cold and cloudy", "75%", "7.2 m/s", "6.1°C")
    } else if lat < 0.0 {
        observation(location_name, "25.3°C", "Warm and sunny", "55%", "4.8 m/s", "27.1°C")
    } else if lat > 30.0 {
        observation(location_name, "18.7°C", "Partly cloudy", "65%", "6.3 m/s", "19.2°C")
    } else {
        observation(location_name, "29.8°C", "Hot and humid", "85%", "3.5 m/s", "34.2°C")
    }
}
