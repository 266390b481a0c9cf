use serde::{Deserialize, Serialize};

/// A single weather lookup. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    /// Lookup by (already resolved) city name.
    City { name: String },
    /// Lookup by geographic coordinates.
    Coordinates { latitude: f64, longitude: f64 },
}

/// The domain result handed to callers.
///
/// All fields are pre-formatted for presentation; the unit conventions
/// differ between city and coordinate lookups and are fixed at mapping time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub city: String,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind_speed: String,
    pub feels_like: String,
}

/// Raw provider response as parsed off the wire.
///
/// Every block is optional here. Whether a payload is usable is decided by
/// the response validator, not by the parser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderPayload {
    pub name: Option<String>,
    pub main: Option<MainData>,
    pub weather: Option<Vec<WeatherDescription>>,
    pub wind: Option<WindData>,
}

/// Temperature block of the provider response (`units=metric`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainData {
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub humidity: u8,
}

/// One entry of the weather-description list. The first entry is the
/// authoritative one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherDescription {
    #[serde(default)]
    pub description: String,
}

/// Wind block of the provider response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindData {
    #[serde(default)]
    pub speed: f64,
}
