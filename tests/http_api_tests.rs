//! HTTP tests for the JSON API and the form-encoded client endpoint

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use tower::ServiceExt; // for `oneshot`

use fizzbench::{
    config::{BenchmarkConfig, Config, LogFormat, ServerConfig},
    strategies::builtin_registry,
    AppState,
};

const ITERATIONS: u32 = 4;

fn test_config(limit: u32) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "warn".to_string(),
            log_format: LogFormat::Pretty,
            request_timeout_secs: 30,
            static_dir: None,
        },
        benchmark: BenchmarkConfig {
            iterations: ITERATIONS,
            max_iterations: 50,
            max_concurrent: 1,
            fizzbuzz_limit: limit,
        },
    }
}

/// Create test router over the built-in catalog printing `1..=limit`
fn create_test_router(limit: u32) -> Router {
    let registry = builtin_registry(limit).expect("catalog must build");
    fizzbench::app(AppState::new(registry, test_config(limit)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));

    (status, json)
}

async fn post_form(app: &Router, form: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api.php")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

async fn make_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    send(app, request).await
}

// -----------------------------------------------------------------------------
// Form-encoded endpoint
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_legacy_run_returns_exact_output() {
    let app = create_test_router(5);

    let (status, body) = post_form(&app, "action=run&version=classic").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "1<br>2<br>Fizz<br>4<br>Buzz<br>");
    assert!(body["executionTime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_legacy_run_defaults_to_classic() {
    let app = create_test_router(3);

    let (status, body) = post_form(&app, "action=run").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "1<br>2<br>Fizz<br>");
}

#[tokio::test]
async fn test_legacy_run_unknown_version_is_in_band() {
    let app = create_test_router(5);

    let (status, body) = post_form(&app, "action=run&version=nonexistent").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Unknown version" }));
}

#[tokio::test]
async fn test_legacy_unknown_action_is_in_band() {
    let app = create_test_router(5);

    let (status, body) = post_form(&app, "action=explode").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Unknown action");
}

#[tokio::test]
async fn test_legacy_benchmark_payload() {
    let app = create_test_router(15);

    let (status, body) = post_form(&app, "action=benchmark").await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_object().expect("results mapping");
    assert_eq!(results.len(), 17);
    assert!(results.contains_key("classic"));

    // `rank` numbers the entries 1..=K by ascending mean
    let mut by_rank: Vec<&Value> = results.values().collect();
    by_rank.sort_by_key(|r| r["rank"].as_u64().unwrap());
    let ranks: Vec<u64> = by_rank.iter().map(|r| r["rank"].as_u64().unwrap()).collect();
    assert_eq!(ranks, (1..=17).collect::<Vec<u64>>());
    assert!(by_rank
        .windows(2)
        .all(|w| w[0]["time"].as_f64().unwrap() <= w[1]["time"].as_f64().unwrap()));

    let mut overall: Vec<u64> = results
        .values()
        .map(|r| r["overallRank"].as_u64().unwrap())
        .collect();
    overall.sort_unstable();
    assert_eq!(overall, (1..=17).collect::<Vec<u64>>());

    for entry in results.values() {
        assert_eq!(entry["runs"], ITERATIONS);
        let (time, min, max) = (
            entry["time"].as_f64().unwrap(),
            entry["min"].as_f64().unwrap(),
            entry["max"].as_f64().unwrap(),
        );
        assert!(min <= time && time <= max, "{entry}");

        let breakdown = &entry["rankBreakdown"];
        let sum: u64 = ["time", "min", "max", "variance"]
            .iter()
            .map(|k| breakdown[*k].as_u64().unwrap())
            .sum();
        assert_eq!(entry["overallScore"].as_u64().unwrap(), sum);
        assert_eq!(breakdown["time"], entry["rank"]);
    }
}

// -----------------------------------------------------------------------------
// JSON API
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_health() {
    let app = create_test_router(5);

    let (status, body) = make_request(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["strategies"], 17);
}

#[tokio::test]
async fn test_list_strategies_in_registration_order() {
    let app = create_test_router(5);

    let (status, body) = make_request(&app, Method::GET, "/api/v1/strategies", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 17);
    assert_eq!(body["strategies"][0]["id"], "original");
    assert_eq!(body["strategies"][1]["id"], "classic");
    assert_eq!(body["strategies"][1]["complexity"], "O(n)");
}

#[tokio::test]
async fn test_get_unknown_strategy_is_not_found() {
    let app = create_test_router(5);

    let (status, body) =
        make_request(&app, Method::GET, "/api/v1/strategies/nonexistent", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_strategy_includes_source() {
    let app = create_test_router(5);

    let (status, body) =
        make_request(&app, Method::GET, "/api/v1/strategies/classic", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "classic");
    let source = body["source"].as_str().unwrap();
    assert!(!source.is_empty());
    assert!(source.contains("i % 15 == 0"));
}

#[tokio::test]
async fn test_run_strategy() {
    let app = create_test_router(5);

    let (status, body) =
        make_request(&app, Method::POST, "/api/v1/strategies/match/run", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["strategy_id"], "match");
    assert_eq!(body["output"], "1<br>2<br>Fizz<br>4<br>Buzz<br>");
}

#[tokio::test]
async fn test_benchmark_zero_iterations_rejected() {
    let app = create_test_router(5);

    let (status, body) =
        make_request(&app, Method::POST, "/api/v1/benchmark?iterations=0", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_CONFIGURATION");
}

#[tokio::test]
async fn test_benchmark_sorted_by_min() {
    let app = create_test_router(15);

    let (status, body) = make_request(
        &app,
        Method::POST,
        "/api/v1/benchmark?iterations=2&sort=min",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["iterations"], 2);
    assert_eq!(body["sort"], "min");

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 17);
    let mins: Vec<f64> = results.iter().map(|r| r["min_ms"].as_f64().unwrap()).collect();
    assert!(mins.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_rankings_reference_scenario() {
    let app = create_test_router(5);

    let payload = json!({
        "summaries": [
            { "strategy_id": "original", "mean_ms": 10.0, "min_ms": 8.0, "max_ms": 12.0, "sample_count": 1000 },
            { "strategy_id": "classic", "mean_ms": 5.0, "min_ms": 4.0, "max_ms": 7.0, "sample_count": 1000 },
            { "strategy_id": "clean", "mean_ms": 5.0, "min_ms": 1.0, "max_ms": 9.0, "sample_count": 1000 }
        ]
    });

    let (status, body) =
        make_request(&app, Method::POST, "/api/v1/rankings", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sort"], "overall");

    let order: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["strategy_id"].as_str().unwrap())
        .collect();
    assert_eq!(order, ["classic", "clean", "original"]);

    let classic = &body["results"][0];
    assert_eq!(classic["name"], "Classic Approach");
    assert_eq!(classic["ranks"], json!({ "mean": 1, "min": 2, "max": 1, "variance": 1 }));
    assert_eq!(classic["overall_score"], 5);

    // Re-ranking the same input is idempotent
    let (_, again) = make_request(&app, Method::POST, "/api/v1/rankings", Some(payload)).await;
    assert_eq!(again, body);
}

#[tokio::test]
async fn test_rankings_rejects_bad_input() {
    let app = create_test_router(5);

    let (status, _) = make_request(
        &app,
        Method::POST,
        "/api/v1/rankings",
        Some(json!({ "summaries": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = make_request(
        &app,
        Method::POST,
        "/api/v1/rankings",
        Some(json!({ "summaries": [
            { "strategy_id": "ghost", "mean_ms": 1.0, "min_ms": 1.0, "max_ms": 1.0, "sample_count": 1 }
        ] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = make_request(
        &app,
        Method::POST,
        "/api/v1/rankings",
        Some(json!({ "summaries": [
            { "strategy_id": "classic", "mean_ms": 9.0, "min_ms": 1.0, "max_ms": 2.0, "sample_count": 1 }
        ] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = create_test_router(5);

    let request = Request::builder()
        .uri("/api/v1/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_catalog_builds_for_any_positive_limit() {
    assert_ok!(builtin_registry(1));
    assert_ok!(builtin_registry(10_000));

    let mut registry = builtin_registry(1).unwrap();
    let duplicate = fizzbench::strategies::StrategyDescriptor::new("classic", "Again", |_| Ok(()));
    assert_err!(registry.register(duplicate));
}
