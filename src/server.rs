//! Axum front end: one page, one bootstrap endpoint, one callback endpoint.
//!
//! The server holds no session state. Each browser keeps its own
//! [`SelectionState`] and sends it back with every change, so concurrent
//! sessions only ever share the read-only dataset.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::Dataset;
use crate::error::{DashResult, DashboardError};
use crate::layout::{PageLayout, build_page_layout};
use crate::runtime::{ChartUpdate, InputChange, SelectionState, apply_change, render_all};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Clone)]
struct AppState {
    dataset: Arc<Dataset>,
    layout: Arc<PageLayout>,
}

/// Initial page payload: the static layout plus every chart resolved from
/// the default selection.
#[derive(Debug, Serialize)]
struct BootstrapResponse {
    layout: PageLayout,
    state: SelectionState,
    updates: Vec<ChartUpdate>,
}

#[derive(Debug, Deserialize)]
struct CallbackRequest {
    state: SelectionState,
    change: InputChange,
}

#[derive(Debug, Serialize)]
struct CallbackResponse {
    state: SelectionState,
    updates: Vec<ChartUpdate>,
}

/// Builds the dashboard router around a loaded dataset.
#[must_use]
pub fn router(dataset: Arc<Dataset>) -> Router {
    let layout = Arc::new(build_page_layout(&dataset));
    let state = AppState { dataset, layout };
    Router::new()
        .route("/", get(index))
        .route("/api/bootstrap", get(bootstrap))
        .route("/api/callback", post(callback))
        .with_state(state)
}

/// Serves the dashboard until the process is stopped.
pub async fn serve(bind_addr: &str, dataset: Arc<Dataset>) -> DashResult<()> {
    let app = router(dataset);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| DashboardError::Server(format!("failed to bind {bind_addr}: {e}")))?;
    info!(%bind_addr, "dashboard listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| DashboardError::Server(e.to_string()))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn bootstrap(State(app): State<AppState>) -> Json<BootstrapResponse> {
    let state = SelectionState::initial(&app.dataset);
    let updates = render_all(&app.dataset, &state);
    Json(BootstrapResponse {
        layout: (*app.layout).clone(),
        state,
        updates,
    })
}

async fn callback(
    State(app): State<AppState>,
    Json(request): Json<CallbackRequest>,
) -> Json<CallbackResponse> {
    let mut state = request.state;
    let updates = apply_change(&app.dataset, &mut state, request.change);
    Json(CallbackResponse { state, updates })
}
