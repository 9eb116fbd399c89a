/// End-to-end tests for the HTTP API.
///
/// Each test starts the real router on an ephemeral localhost port in a
/// background thread and talks to it over HTTP, so routing, middleware and
/// JSON encoding are all exercised together.
///
/// Run with: cargo test --test api_integration

use std::net::TcpListener as StdTcpListener;
use std::thread;

use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use watertrace_service::api::{self, AppState};
use watertrace_service::data::Dataset;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Starts a server and returns its base URL. The server thread lives until
/// the test process exits.
fn spawn_server() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.set_nonblocking(true).expect("set non-blocking");
    let address = listener.local_addr().expect("local address");

    let state = AppState::new(Dataset::load().expect("embedded tables load"), 100);

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("adopt std listener");
            let _ = api::serve(listener, state).await;
        });
    });

    format!("http://{}", address)
}

fn get_json(client: &Client, url: &str) -> Value {
    let response = client.get(url).send().expect("request succeeds");
    assert_eq!(response.status(), StatusCode::OK, "GET {}", url);
    response.json().expect("JSON body")
}

fn post_raw(client: &Client, url: &str, body: &'static str) -> (StatusCode, Value) {
    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .expect("request succeeds");
    let status = response.status();
    (status, response.json().expect("JSON body"))
}

// ---------------------------------------------------------------------------
// Service endpoints
// ---------------------------------------------------------------------------

#[test]
fn test_root_lists_endpoints() {
    let base = spawn_server();
    let body = get_json(&Client::new(), &base);

    let endpoints = body["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 8);
    assert!(endpoints.iter().any(|e| e == "/api/predict"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_health_reports_loaded_data() {
    let base = spawn_server();
    let body = get_json(&Client::new(), &format!("{}/api/health", base));

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["data_loaded"], true);
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'), "timestamp {}", timestamp);
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

// ---------------------------------------------------------------------------
// Data endpoints
// ---------------------------------------------------------------------------

#[test]
fn test_historical_timeseries() {
    let base = spawn_server();
    let body = get_json(&Client::new(), &format!("{}/api/historical/timeseries", base));

    assert_eq!(body["data"].as_array().unwrap().len(), 163);
    assert_eq!(body["summary"]["total_records"], 163);
    assert_eq!(body["summary"]["unit"], "cm");

    let stats = &body["summary"]["statistics"];
    let min = stats["min"].as_f64().unwrap();
    let max = stats["max"].as_f64().unwrap();
    let mean = stats["mean"].as_f64().unwrap();
    assert!(min <= mean && mean <= max);
}

#[test]
fn test_recent_timeseries_anomalies() {
    let base = spawn_server();
    let body = get_json(&Client::new(), &format!("{}/api/recent/timeseries", base));

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 84);
    assert_eq!(body["success"], true);

    let baseline = body["summary"]["baseline_value"].as_f64().unwrap();
    for point in data {
        assert_eq!(point["data_source"], "GLDAS");
        let value = point["groundwater_cm"].as_f64().unwrap();
        let anomaly = point["groundwater_anomaly_cm"].as_f64().unwrap();
        assert!((anomaly - (value - baseline)).abs() < 1e-9);
    }
}

#[test]
fn test_gldas_trend_analysis() {
    let base = spawn_server();
    let body = get_json(&Client::new(), &format!("{}/api/gldas/trend-analysis", base));

    let analysis = &body["analysis"];
    let annual = analysis["annual_change"].as_f64().unwrap();
    let monthly = analysis["monthly_change"].as_f64().unwrap();
    assert!((monthly * 12.0 - annual).abs() < 1e-9);

    let direction = analysis["trend_direction"].as_str().unwrap();
    assert_eq!(direction, if annual > 0.0 { "increasing" } else { "decreasing" });

    assert_eq!(body["metadata"]["period"], "2018-01 to 2024-12");
    assert_eq!(body["yearly_averages"].as_array().unwrap().len(), 7);
    assert_eq!(body["yearly_averages"][0]["year"], 2018);
    assert_eq!(body["time_series"].as_array().unwrap().len(), 84);
}

#[test]
fn test_analysis_summary_counts() {
    let base = spawn_server();
    let body = get_json(&Client::new(), &format!("{}/api/analysis/summary", base));

    assert_eq!(body["datasets"]["historical"]["data_points"], 163);
    assert_eq!(body["datasets"]["recent"]["data_points"], 84);
    assert_eq!(body["study_area"]["provinces"], 4);
}

#[test]
fn test_combined_timeline_sorted_with_continuity() {
    let base = spawn_server();
    let body = get_json(&Client::new(), &format!("{}/api/combined/timeline", base));

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 163 + 84);

    let dates: Vec<&str> = data.iter().map(|p| p["date"].as_str().unwrap()).collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]), "timeline not sorted");

    assert_eq!(data[0]["source"], "GRACE");
    assert_eq!(data[0]["type"], "measured_anomaly");
    assert_eq!(data[163]["source"], "GLDAS");
    assert_eq!(data[163]["type"], "estimated_anomaly");

    let summary = &body["summary"];
    let final_value = summary["grace_period"]["final_value"].as_f64().unwrap();
    assert_eq!(summary["conversion"]["transform"]["offset"].as_f64().unwrap(), final_value);
    assert_eq!(summary["conversion"]["approximate"], true);
}

#[test]
fn test_districts_summary() {
    let base = spawn_server();
    let body = get_json(&Client::new(), &format!("{}/api/districts/groundwater", base));

    assert_eq!(body["data"]["type"], "FeatureCollection");
    let features = body["data"]["features"].as_array().unwrap();
    assert_eq!(features.len(), 32);
    assert_eq!(features[0]["type"], "Feature");
    assert_eq!(features[0]["geometry"]["type"], "Point");

    let summary = &body["summary"];
    assert_eq!(summary["total_districts"], 32);
    assert_eq!(summary["critical_districts"], 8);
    assert_eq!(summary["improving_districts"], 0);
    assert_eq!(summary["most_affected"], "Quetta");
    assert_eq!(summary["most_depleted"].as_f64().unwrap(), -15.3);

    let quetta = features
        .iter()
        .find(|f| f["properties"]["district"] == "Quetta")
        .unwrap();
    assert_eq!(quetta["properties"]["status"], "Critical");
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

#[test]
fn test_predict_three_years() {
    let base = spawn_server();
    let (status, body) = post_raw(&Client::new(), &format!("{}/api/predict", base), r#"{"years": 3}"#);

    assert_eq!(status, StatusCode::OK);
    let years: Vec<i64> = body["predictions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![2018, 2019, 2020]);

    let first = body["predictions"][0]["predicted_groundwater_cm"].as_f64().unwrap();
    assert!((first - (-8.727905291100553 - 0.81)).abs() < 1e-9);
    assert_eq!(body["predictions"][0]["confidence"], "medium");
    assert_eq!(body["parameters"]["base_year"], 2017);
    assert_eq!(body["parameters"]["years_predicted"], 3);
}

#[test]
fn test_predict_defaults_and_negative_horizon() {
    let base = spawn_server();
    let client = Client::new();
    let url = format!("{}/api/predict", base);

    let (status, body) = post_raw(&client, &url, "{}");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predictions"].as_array().unwrap().len(), 5);

    let (status, body) = post_raw(&client, &url, r#"{"years": -2}"#);
    assert_eq!(status, StatusCode::OK);
    assert!(body["predictions"].as_array().unwrap().is_empty());
}

#[test]
fn test_predict_rejects_invalid_body() {
    let base = spawn_server();
    let (status, body) = post_raw(&Client::new(), &format!("{}/api/predict", base), "years=3");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[test]
fn test_predict_rejects_excessive_horizon() {
    let base = spawn_server();
    let (status, body) =
        post_raw(&Client::new(), &format!("{}/api/predict", base), r#"{"years": 1000}"#);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("100"));
}

// ---------------------------------------------------------------------------
// Routing errors and CORS
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_path_is_json_404() {
    let base = spawn_server();
    let response = Client::new()
        .get(format!("{}/api/does-not-exist", base))
        .send()
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().unwrap();
    assert_eq!(body["error"], "Not found");
}

#[test]
fn test_wrong_method_is_json_405() {
    let base = spawn_server();
    let client = Client::new();

    let response = client.get(format!("{}/api/predict", base)).send().unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = response.json().unwrap();
    assert_eq!(body["error"], "Method not allowed");

    let response = client.post(format!("{}/api/health", base)).send().unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn test_preflight_and_cors_headers() {
    let base = spawn_server();
    let client = Client::new();

    let response = client
        .request(Method::OPTIONS, format!("{}/api/predict", base))
        .send()
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(
        response.headers()["access-control-allow-methods"],
        "GET, POST, OPTIONS"
    );
    assert_eq!(response.headers()["access-control-allow-headers"], "Content-Type");
    assert!(response.text().unwrap().is_empty());

    // Error responses carry the headers too.
    let response = client.get(format!("{}/nowhere", base)).send().unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
