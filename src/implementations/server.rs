//! HTTP surface for the authoritative proof heuristic.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{ get, post },
    Json, Router,
};
use log::{ error, info };
use serde::Serialize;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{ Any, CorsLayer };

use crate::errors::ReqmineResult;
use crate::implementations::config::ServerConfig;
use crate::implementations::prover::evaluate_request;
use crate::models::proof::{ ProveRequest, ProveResponse };

pub const INVALID_BODY_MESSAGE: &str = "Expected { tla, moduleName, invariants[] }";

#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

impl ApiError {
    fn bad_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: INVALID_BODY_MESSAGE.to_string(),
        }
    }
}

/// Blocking evaluation run for each accepted request
pub type Evaluator = fn(&ProveRequest) -> ProveResponse;

#[derive(Clone)]
struct AppState {
    timeout: Duration,
    evaluate: Evaluator,
}

/// Create the prover router
pub fn router(timeout: Duration) -> Router {
    router_with_evaluator(timeout, evaluate_request)
}

/// Router whose per-request evaluation is `evaluate`, bounded by `timeout`
pub fn router_with_evaluator(timeout: Duration, evaluate: Evaluator) -> Router {
    Router::new()
        .route("/api/prove", post(prove))
        .route("/health", get(health))
        .with_state(AppState { timeout, evaluate })
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

/// Bind the configured host (name or address) and port
pub async fn bind(config: &ServerConfig) -> ReqmineResult<TcpListener> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    Ok(listener)
}

/// Bind and serve until the process is stopped
pub async fn run(config: &ServerConfig) -> ReqmineResult<()> {
    let listener = bind(config).await?;
    let app = router(Duration::from_millis(config.timeout_ms));

    info!("Prover API listening on http://{}/api/prove", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Hand-validated so malformed bodies get a 400 with a fixed message
fn parse_request(body: &serde_json::Value) -> Result<ProveRequest, ApiError> {
    let tla = body
        .get("tla")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(ApiError::bad_request)?;

    let invariants = match body.get("invariants") {
        None => Vec::new(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(_) => return Err(ApiError::bad_request()),
    };

    let module_name = body
        .get("moduleName")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Ok(ProveRequest {
        tla: tla.to_string(),
        module_name,
        invariants,
    })
}

async fn prove(
    State(state): State<AppState>,
    body: Option<Json<serde_json::Value>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = body.ok_or_else(ApiError::bad_request)?;
    let request = parse_request(&body)?;

    let timeout_ms = state.timeout.as_millis();
    let evaluate = state.evaluate;
    let work = tokio::task::spawn_blocking(move || evaluate(&request));

    match tokio::time::timeout(state.timeout, work).await {
        Ok(Ok(response)) => {
            let value = serde_json::to_value(&response).map_err(|e| ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: e.to_string(),
            })?;
            Ok(Json(value))
        }
        Ok(Err(join_error)) => {
            error!("Prover task failed: {}", join_error);
            Err(ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: join_error.to_string(),
            })
        }
        Err(_) => Err(ApiError {
            status: StatusCode::GATEWAY_TIMEOUT,
            error: format!("Prover timed out after {} ms", timeout_ms),
        }),
    }
}
