//! Integration tests for the OpenWeatherMap client using wiremock
//!
//! These tests verify the weather client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use std::time::Duration;

use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample `/weather` response for London
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [
            { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
        ],
        "base": "stations",
        "main": {
            "temp": 15.2,
            "feels_like": 14.1,
            "temp_min": 13.9,
            "temp_max": 16.3,
            "pressure": 1012,
            "humidity": 70
        },
        "visibility": 10000,
        "wind": { "speed": 3.1, "deg": 240 },
        "clouds": { "all": 0 },
        "dt": 1_715_774_400,
        "sys": { "country": "GB", "sunrise": 1_715_745_000, "sunset": 1_715_801_000 },
        "timezone": 3600,
        "id": 2_643_743,
        "name": "London",
        "cod": 200
    })
}

/// Sample `/forecast` response with `count` 3-hour slots starting 2024-05-15 00:00 UTC
fn sample_forecast_response(count: i32) -> serde_json::Value {
    let start = 1_715_731_200_i64;
    let list: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "dt": start + i64::from(i) * 3 * 3600,
                "main": { "temp": 10.0 + f64::from(i), "feels_like": 9.0, "humidity": 60 },
                "weather": [
                    { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
                ],
                "wind": { "speed": 4.0, "deg": 200 },
                "dt_txt": "2024-05-15 00:00:00"
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": count,
        "list": list,
        "city": { "id": 2_988_507, "name": "Paris", "country": "FR" }
    })
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> OpenWeatherMapClient {
    create_test_client_with_timeout(mock_server, 5)
}

fn create_test_client_with_timeout(mock_server: &MockServer, timeout_secs: u64) -> OpenWeatherMapClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: "test-key".to_string(),
        timeout_secs,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    OpenWeatherMapClient::new(config).expect("Failed to create client")
}

/// Setup a mock for an endpoint with the given response
async fn setup_mock(mock_server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_current_by_city_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let weather = result.unwrap();
    assert_eq!(weather.name, "London");
    assert!((weather.main.temp - 15.2).abs() < 0.01);
    assert_eq!(weather.main.humidity, 70);
    assert!((weather.wind.speed - 3.1).abs() < 0.01);
    assert_eq!(weather.weather[0].description, "clear sky");
}

#[tokio::test]
async fn test_current_by_coordinates_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "51.5085"))
        .and(query_param("lon", "-0.1257"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_coordinates(51.5085, -0.1257).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_forecast_by_city_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response(40)),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast_by_city("Paris").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let forecast = result.unwrap();
    assert_eq!(forecast.city.name, "Paris");
    assert_eq!(forecast.list.len(), 40);
    assert!(forecast.list[0].dt < forecast.list[1].dt);
}

#[tokio::test]
async fn test_empty_condition_list_still_parses() {
    let mock_server = MockServer::start().await;

    let mut body = sample_current_response();
    body["weather"] = serde_json::json!([]);
    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_json(body),
    )
    .await;

    let client = create_test_client(&mock_server);
    let weather = client.current_by_city("London").await.unwrap();

    assert!(weather.primary_condition().is_none());
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_not_found_returns_not_found() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Atlantis").await;

    assert!(
        matches!(&result, Err(WeatherError::NotFound(m)) if m == "city not found"),
        "Expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_api_key_returns_unauthorized() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast_by_city("Paris").await;

    assert!(
        matches!(result, Err(WeatherError::Unauthorized)),
        "Expected Unauthorized, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_required_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "cod": "200" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast_by_city("Paris").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200)
            .set_body_json(sample_current_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = create_test_client_with_timeout(&mock_server, 1);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::Timeout)),
        "Expected Timeout, got: {result:?}"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_request_contains_credentials_units_and_language() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New York"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("New York").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_configured_language_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lang", "ru"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response(3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: "test-key".to_string(),
        language: "ru".to_string(),
        ..Default::default()
    };
    let client = OpenWeatherMapClient::new(config).unwrap();
    let result = client.forecast_by_city("Moscow").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
