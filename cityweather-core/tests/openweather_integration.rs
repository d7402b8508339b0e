//! Integration tests for `WeatherClient` over `OpenWeatherProvider` using wiremock.

use cityweather_core::{
    ConditionIcon, Config, FavoritesStore, SearchError, WeatherClient,
    provider::openweather::OpenWeatherProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body(name: &str, temp: f64, icon: &str) -> serde_json::Value {
    serde_json::json!({
        "cod": 200,
        "name": name,
        "main": { "temp": temp, "feels_like": temp - 1.0, "humidity": 70 },
        "wind": { "speed": 3.5, "deg": 240 },
        "weather": [{ "id": 500, "main": "Rain", "icon": icon }]
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": 4,
        "list": [
            { "dt_txt": "2026-10-17 09:00:00", "main": { "temp": 12.3, "humidity": 80 }, "weather": [{ "icon": "04d" }] },
            { "dt_txt": "2026-10-17 12:00:00", "main": { "temp": 14.6, "humidity": 75 }, "weather": [{ "icon": "10d" }] },
            { "dt_txt": "2026-10-18 12:00:00", "main": { "temp": 11.1, "humidity": 60 }, "weather": [{ "icon": "50d" }] },
            { "dt_txt": "2026-10-18 18:00:00", "main": { "temp": 9.8, "humidity": 65 }, "weather": [{ "icon": "01n" }] }
        ],
        "city": { "name": "London", "country": "GB" }
    })
}

fn client_for(server: &MockServer) -> WeatherClient {
    let provider = OpenWeatherProvider::builder("TEST_KEY".to_string())
        .base_url(server.uri())
        .build()
        .unwrap();
    WeatherClient::new(Box::new(provider))
}

#[tokio::test]
async fn test_search_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("London", 15.9, "10d")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let report = client.search("London").await.unwrap();

    assert_eq!(report.snapshot.humidity_percent, 70);
    assert_eq!(report.snapshot.wind_speed_kmh, 3.5);
    assert_eq!(report.snapshot.temperature_celsius, 15);
    assert_eq!(report.snapshot.location_name, "London");
    assert_eq!(report.snapshot.condition_icon, ConditionIcon::Rain);

    assert_eq!(report.forecast.len(), 2);
    assert_eq!(report.forecast[0].temperature_celsius, 14);
    assert_eq!(report.forecast[0].condition_icon, ConditionIcon::Rain);
    // 50d (mist) is outside the table.
    assert_eq!(report.forecast[1].condition_icon, ConditionIcon::Clear);
    assert!(report.forecast[0].date < report.forecast[1].date);
}

#[tokio::test]
async fn test_city_not_found_skips_forecast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("Atlantis").await;

    assert_eq!(result, Err(SearchError::provider("city not found")));
}

#[tokio::test]
async fn test_forecast_failure_is_atomic() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("London", 15.9, "10d")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("London").await;

    assert_eq!(result, Err(SearchError::provider("Invalid API key.")));
}

#[tokio::test]
async fn test_error_without_message_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search("London").await.unwrap_err();

    match err {
        SearchError::Provider { message } => {
            assert!(message.contains("502"), "message should mention status: {message}");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search("London").await.unwrap_err();

    assert!(matches!(err, SearchError::Network { .. }));
}

#[tokio::test]
async fn test_missing_humidity_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "London",
            "main": { "temp": 15.9 },
            "wind": { "speed": 3.5 },
            "weather": [{ "icon": "10d" }]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": [] })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("London").await;

    assert!(
        matches!(result, Err(SearchError::Network { .. })),
        "expected a network error, got {result:?}"
    );
}

#[tokio::test]
async fn test_humidity_out_of_range_is_network_error() {
    let mock_server = MockServer::start().await;

    let mut body = current_body("London", 15.9, "10d");
    body["main"]["humidity"] = serde_json::json!(180);

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search("London").await.unwrap_err();

    assert!(matches!(err, SearchError::Network { .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 1.
    let provider = OpenWeatherProvider::builder("TEST_KEY".to_string())
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let client = WeatherClient::new(Box::new(provider));

    let err = client.search("London").await.unwrap_err();
    assert!(matches!(err, SearchError::Network { .. }));
}

#[tokio::test]
async fn test_from_config_uses_base_url_and_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("appid", "CFG_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris", 18.2, "01d")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": [] })))
        .mount(&mock_server)
        .await;

    let config = Config {
        api_key: Some("CFG_KEY".to_string()),
        base_url: Some(mock_server.uri()),
        default_city: None,
        timeout_secs: Some(5),
    };
    let client = WeatherClient::from_config(&config).unwrap();

    let report = client.search("  Paris ").await.unwrap();
    assert_eq!(report.snapshot.location_name, "Paris");
    assert!(report.forecast.is_empty());
}

#[tokio::test]
async fn test_two_searches_then_favorites() {
    let mock_server = MockServer::start().await;

    for (city, temp) in [("London", 15.9), ("Paris", 18.2)] {
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", city))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body(city, temp, "02d")))
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut favorites = FavoritesStore::new();

    for city in ["London", "Paris", "London"] {
        let report = client.search(city).await.unwrap();
        favorites.add(report.snapshot);
    }

    let names: Vec<_> = favorites
        .list()
        .iter()
        .map(|s| s.location_name.as_str())
        .collect();
    assert_eq!(names, ["London", "Paris"]);
}
