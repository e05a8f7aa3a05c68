// HTTP request handlers
use crate::domain::error::DashboardError;
use crate::domain::page::Page;
use crate::domain::view::ViewModel;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub page: Page,
}

#[derive(Deserialize)]
pub struct SelectRequest {
    pub client: String,
}

#[derive(Deserialize)]
pub struct OccupancyRequest {
    pub value: i64,
}

#[derive(Deserialize)]
pub struct ActionRequest {
    pub label: String,
}

#[derive(Serialize)]
pub struct SessionCreated {
    pub id: String,
}

/// The composed view plus the last-updated display timestamp, read at render
/// time and never stored.
#[derive(Serialize)]
pub struct ViewResponse {
    pub updated_at: DateTime<Utc>,
    pub view: ViewModel,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/sessions", post(create_session))
        .route("/sessions/:id", delete(close_session))
        .route("/sessions/:id/view", get(get_view))
        .route("/sessions/:id/navigate", post(navigate))
        .route("/sessions/:id/select", post(select_client))
        .route("/sessions/:id/occupancy", post(set_occupancy))
        .route("/sessions/:id/action", post(button_tap))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let id = state.registry.open();
    tracing::info!(session = %id, "session opened");
    (StatusCode::CREATED, Json(SessionCreated { id }))
}

pub async fn close_session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.registry.close(&id) {
        Ok(()) => {
            tracing::info!(session = %id, "session closed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn get_view(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    let composed = state
        .registry
        .with_session(&id, |session| state.composer.compose(session));
    view_response(composed)
}

pub async fn navigate(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<NavigateRequest>,
) -> Response {
    let composed = state.registry.with_session(&id, |session| {
        session.navigation.set_page(request.page);
        state.composer.compose(session)
    });
    view_response(composed)
}

pub async fn select_client(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Response {
    let composed = state.registry.with_session(&id, |session| {
        session
            .selection
            .select(&request.client, state.dataset.enterprise_clients())
            .map(|()| state.composer.compose(session))
    });
    // Flatten session lookup and selection errors; both map to 404
    view_response(composed.and_then(|inner| inner))
}

pub async fn set_occupancy(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<OccupancyRequest>,
) -> Response {
    let composed = state.registry.with_session(&id, |session| {
        session.simulator.set_occupancy(request.value);
        state.composer.compose(session)
    });
    view_response(composed)
}

/// No-op hook for the Memberships/Partners demo buttons. The tap is an
/// interaction event, so the view is still recomposed and returned.
pub async fn button_tap(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ActionRequest>,
) -> Response {
    let composed = state.registry.with_session(&id, |session| {
        tracing::info!(session = %id, label = %request.label, "action tapped");
        state.composer.compose(session)
    });
    view_response(composed)
}

fn view_response(composed: Result<ViewModel, DashboardError>) -> Response {
    match composed {
        Ok(view) => Json(ViewResponse {
            updated_at: Utc::now(),
            view,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: DashboardError) -> Response {
    tracing::debug!(error = %err, "request rejected");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}
