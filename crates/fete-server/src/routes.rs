//! HTTP routes: liveness, health probe, and the party-plan endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use fete_agents::{AgentError, Director};
use fete_models::{PartyPlanResponse, PartyRequest};
use serde::Serialize;
use tracing::error;

/// State shared across handlers.
pub struct AppState {
    pub director: Arc<Director>,
}

type AppStateArc = Arc<AppState>;

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/party-plan", post(create_party_plan))
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Fete party planning API",
        status: "running",
    })
}

/// Health probe. Independent of the generator: the service is healthy as long
/// as it can answer HTTP.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

async fn create_party_plan(
    State(state): State<AppStateArc>,
    payload: Result<Json<PartyRequest>, JsonRejection>,
) -> Result<Json<PartyPlanResponse>, ErrorResponse> {
    // Schema-level failures (missing fields, wrong types, bad JSON) -> 422
    // with a structured validation-error list.
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "detail": [{"msg": rejection.body_text()}]
            })),
        )
    })?;

    let response = state.director.plan(&request).await.map_err(|e| match e {
        AgentError::Validation(detail) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": detail })),
        ),
        other => {
            error!(error = %other, "Party plan generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "Failed to generate party plan" })),
            )
        }
    })?;

    Ok(Json(response))
}
