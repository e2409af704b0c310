use axum::body::Body;
use axum::http::{ Request, StatusCode };
use serde_json::{ json, Value };
use std::time::Duration;
use tower::ServiceExt;

use crate::demo::DEMO_SPEC;
use crate::implementations::config::ServerConfig;
use crate::implementations::prover::evaluate_request;
use crate::implementations::server::{ bind, router, router_with_evaluator, INVALID_BODY_MESSAGE };
use crate::models::proof::{ ProveRequest, ProveResponse };
use crate::tests::setup;

async fn post_json(body: String) -> (StatusCode, Value) {
    send_json(router(Duration::from_secs(5)), body).await
}

async fn send_json(app: axum::Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/prove")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap()
        ).await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_prove_endpoint() {
    setup();

    let body = json!({
        "tla": DEMO_SPEC,
        "moduleName": "TrafficLight",
        "invariants": ["Invariant", "TypeOK"],
    });
    let (status, value) = post_json(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["evidence"], "Backend examined TrafficLight with 2 invariant(s).");
    assert_eq!(value["perInvariant"][0], json!({ "name": "Invariant", "status": "Proved" }));
    assert_eq!(value["perInvariant"][1]["status"], "Failed");
}

#[tokio::test]
async fn test_module_name_defaults() {
    let (status, value) = post_json(json!({ "tla": "x", "invariants": [] }).to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["evidence"], "Backend examined Module with 0 invariant(s).");
}

#[tokio::test]
async fn test_invalid_bodies_are_rejected() {
    setup();

    for body in [
        json!({ "invariants": ["Inv"] }).to_string(),
        json!({ "tla": "", "invariants": [] }).to_string(),
        json!({ "tla": "x", "invariants": "Inv" }).to_string(),
        json!({ "tla": "x", "invariants": null }).to_string(),
        "not json".to_string(),
    ] {
        let (status, value) = post_json(body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(value["error"], INVALID_BODY_MESSAGE);
    }
}

#[tokio::test]
async fn test_health() {
    let response = router(Duration::from_secs(1))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

fn slow_evaluation(request: &ProveRequest) -> ProveResponse {
    std::thread::sleep(Duration::from_millis(500));
    evaluate_request(request)
}

fn broken_evaluation(_request: &ProveRequest) -> ProveResponse {
    panic!("evaluator crashed")
}

#[tokio::test]
async fn test_evaluation_over_budget_times_out() {
    setup();

    let app = router_with_evaluator(Duration::from_millis(20), slow_evaluation);
    let body = json!({ "tla": DEMO_SPEC, "invariants": ["Invariant"] });
    let (status, value) = send_json(app, body.to_string()).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(value, json!({ "error": "Prover timed out after 20 ms" }));
}

#[tokio::test]
async fn test_crashed_evaluation_is_internal_error() {
    setup();

    let app = router_with_evaluator(Duration::from_secs(5), broken_evaluation);
    let (status, value) = send_json(app, json!({ "tla": "x" }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn test_bind_accepts_host_names() {
    setup();

    let config = ServerConfig {
        host: "localhost".to_string(),
        port: 0,
        timeout_ms: 1000,
    };
    let listener = bind(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();
    assert!(addr.ip().is_loopback());
    assert_ne!(addr.port(), 0);

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        ..config
    };
    assert!(bind(&config).await.is_ok());
}
