//! Integration tests for the OpenWeather fetcher and the resolution service
//! using wiremock.
//!
//! These tests verify behavior against a mock HTTP server, covering the
//! status-code classification paths and the end-to-end mapping.

use std::sync::Arc;

use skycast_core::{
    CityResolver, FailureKind, OpenWeatherFetcher, WeatherError, WeatherFetcher, WeatherQuery,
    WeatherService,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample OpenWeather current-weather response for testing
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [
            { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
        ],
        "base": "stations",
        "main": {
            "temp": 15.23,
            "feels_like": 13.08,
            "temp_min": 13.9,
            "temp_max": 16.1,
            "pressure": 1012,
            "humidity": 85
        },
        "visibility": 10000,
        "wind": { "speed": 4.16, "deg": 240 },
        "clouds": { "all": 90 },
        "dt": 1_700_000_000,
        "name": "London",
        "cod": 200
    })
}

fn create_test_fetcher(mock_server: &MockServer) -> OpenWeatherFetcher {
    OpenWeatherFetcher::new("TEST_KEY".to_string(), format!("{}/weather", mock_server.uri()))
}

fn create_test_service(mock_server: &MockServer) -> WeatherService {
    WeatherService::new(Arc::new(create_test_fetcher(mock_server)), CityResolver::default())
}

async fn setup_weather_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Fetcher behavior
// ============================================================================

#[tokio::test]
async fn fetch_parses_a_successful_payload() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let fetcher = create_test_fetcher(&mock_server);
    let payload = fetcher
        .fetch(&WeatherQuery::City { name: "London".to_string() })
        .await
        .expect("fetch must succeed");

    assert_eq!(payload.name.as_deref(), Some("London"));
    let main = payload.main.expect("main block must be present");
    assert!((main.temp - 15.23).abs() < f64::EPSILON);
    assert_eq!(main.humidity, 85);
    let descriptions = payload.weather.expect("weather list must be present");
    assert_eq!(descriptions[0].description, "light rain");
}

#[tokio::test]
async fn fetch_sends_city_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = create_test_fetcher(&mock_server);
    let result = fetcher.fetch(&WeatherQuery::City { name: "London".to_string() }).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn fetch_sends_coordinate_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "51.5"))
        .and(query_param("lon", "-0.12"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = create_test_fetcher(&mock_server);
    let result = fetcher
        .fetch(&WeatherQuery::Coordinates { latitude: 51.5, longitude: -0.12 })
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn fetch_reports_non_success_statuses_with_body() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(503).set_body_string("upstream unavailable"),
    )
    .await;

    let fetcher = create_test_fetcher(&mock_server);
    let failure = fetcher
        .fetch(&WeatherQuery::City { name: "London".to_string() })
        .await
        .unwrap_err();

    assert_eq!(failure.status, Some(503));
    assert_eq!(failure.body.as_deref(), Some("upstream unavailable"));
}

#[tokio::test]
async fn fetch_reports_undecodable_bodies_as_other() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let fetcher = create_test_fetcher(&mock_server);
    let failure = fetcher
        .fetch(&WeatherQuery::City { name: "London".to_string() })
        .await
        .unwrap_err();

    assert_eq!(failure.status, None);
    assert_eq!(failure.kind, FailureKind::Other);
}

// ============================================================================
// End-to-end service flows
// ============================================================================

#[tokio::test]
async fn city_lookup_end_to_end() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let service = create_test_service(&mock_server);
    let obs = service.weather_by_city("London").await.expect("lookup must succeed");

    assert_eq!(obs.city, "London");
    assert_eq!(obs.temperature, "15.2C");
    assert_eq!(obs.description, "light rain");
    assert_eq!(obs.humidity, "85%");
    assert_eq!(obs.wind_speed, "4.2 km/h");
    assert_eq!(obs.feels_like, "13.1C");
}

#[tokio::test]
async fn misspelled_city_is_corrected_before_the_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_test_service(&mock_server);
    let obs = service.weather_by_city("Londn").await.expect("lookup must succeed");
    assert_eq!(obs.city, "London");
}

#[tokio::test]
async fn coordinate_lookup_end_to_end() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let service = create_test_service(&mock_server);
    let obs = service
        .weather_by_coordinates(51.5, -0.12)
        .await
        .expect("lookup must succeed");

    assert_eq!(obs.temperature, "15.2°C");
    assert_eq!(obs.feels_like, "13.1°C");
    assert_eq!(obs.wind_speed, "4.2 m/s");
}

#[tokio::test]
async fn provider_404_is_city_not_found() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_string(r#"{"cod":"404","message":"city not found"}"#),
    )
    .await;

    let service = create_test_service(&mock_server);
    let err = service.weather_by_city("Atlantis").await.unwrap_err();
    match err {
        WeatherError::CityNotFound(city) => assert_eq!(city, "Atlantis"),
        other => panic!("expected CityNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_401_answers_with_mock_data_instead_of_failing() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
    )
    .await;

    let service = create_test_service(&mock_server);

    let obs = service.weather_by_city("Tokyo").await.expect("mock fallback must succeed");
    assert_eq!(obs.description, "Sunny");
    assert_eq!(obs.wind_speed, "12.3 km/h");

    let obs = service
        .weather_by_coordinates(-20.0, 30.0)
        .await
        .expect("mock fallback must succeed");
    assert_eq!(obs.city, "Your Location");
    assert_eq!(obs.description, "Warm and sunny");
}

#[tokio::test]
async fn provider_500_is_a_provider_error_with_status_and_body() {
    let mock_server = MockServer::start().await;
    setup_weather_mock(&mock_server, ResponseTemplate::new(500).set_body_string("boom")).await;

    let service = create_test_service(&mock_server);
    let err = service.weather_by_city("London").await.unwrap_err();
    match err {
        WeatherError::ProviderError(msg) => assert_eq!(msg, "HTTP 500: boom"),
        other => panic!("expected ProviderError, got {other:?}"),
    }
}

#[tokio::test]
async fn incomplete_payload_is_an_invalid_response() {
    let mock_server = MockServer::start().await;

    let mut body = sample_weather_response();
    body.as_object_mut().expect("body must be an object").remove("wind");
    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let service = create_test_service(&mock_server);
    let err = service.weather_by_city("London").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid API response: Missing wind data for London");
}
