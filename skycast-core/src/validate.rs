use crate::error::WeatherError;

/// Syntactic check on a raw city string.
///
/// Accepts ASCII letters, digits, whitespace, hyphen and apostrophe.
/// Empty and whitespace-only strings are rejected.
pub fn validate_city_name(raw: &str) -> Result<(), WeatherError> {
    if raw.trim().is_empty() {
        return Err(WeatherError::InvalidInput(format!("Invalid city name {raw}")));
    }

    let ok = raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || c == '-' || c == '\'');

    if ok {
        Ok(())
    } else {
        Err(WeatherError::InvalidInput(format!("Invalid city name {raw}")))
    }
}

/// A city string with more than one digit is treated as not found.
///
/// This reads like a malformed-input case, but the established contract maps
/// it to `CityNotFound` and callers depend on that. Run after
/// [`validate_city_name`].
pub fn validate_city_digit_count(raw: &str) -> Result<(), WeatherError> {
    let digit_count = raw.chars().filter(char::is_ascii_digit).count();

    if digit_count <= 1 {
        Ok(())
    } else {
        Err(WeatherError::CityNotFound(raw.to_string()))
    }
}

/// Range check on geographic coordinates, bounds inclusive.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), WeatherError> {
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(WeatherError::InvalidInput(format!("Invalid coordinates: lat={lat}, lon={lon}")))
    }
}
