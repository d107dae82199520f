//! Axum surface over the relay service.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::service::{RelayOutcome, RelayService};

pub fn relay_router(service: Arc<RelayService>) -> Router {
    Router::new()
        .route(
            "/api/generate",
            post(generate).fallback(method_not_allowed),
        )
        .route("/api/chat", post(chat).fallback(method_not_allowed))
        .route("/api/profile", get(profile))
        .route("/api/profile/projects", get(projects))
        .with_state(service)
}

fn into_response(outcome: RelayOutcome) -> Response {
    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(outcome.body)).into_response()
}

async fn generate(State(service): State<Arc<RelayService>>, Json(body): Json<Value>) -> Response {
    into_response(service.forward_generate(body).await)
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

async fn chat(
    State(service): State<Arc<RelayService>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    into_response(service.chat(&request.message).await)
}

async fn profile(State(service): State<Arc<RelayService>>) -> Response {
    into_response(service.profile())
}

#[derive(Debug, Deserialize)]
struct ProjectsQuery {
    filter: Option<String>,
}

async fn projects(
    State(service): State<Arc<RelayService>>,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    into_response(service.projects(query.filter.as_deref()))
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}
