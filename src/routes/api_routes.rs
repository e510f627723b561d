use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::models::{ChatRequest, ChatResponse, HealthReport, StatusReport, ToolsUnavailable};
use crate::service::contract_service::ContractService;

const TOOLS_UNAVAILABLE_STATUS: &str = "Composio not available";

/// Builds the HTTP surface. `/tools` exists only when tool support is on.
pub fn router(svc: ContractService) -> Router {
    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler));

    if svc.tools_enabled() {
        app = app.route("/tools", get(tools_handler));
    }

    app.layer(TraceLayer::new_for_http()).with_state(svc)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET `/` — static service description
pub async fn root_handler(State(svc): State<ContractService>) -> Json<StatusReport> {
    Json(svc.status())
}

/// GET `/health`
pub async fn health_handler(State(svc): State<ContractService>) -> Json<HealthReport> {
    Json(svc.health())
}

/// GET `/tools` — provider failures are reported in the body, never as an error status
pub async fn tools_handler(State(svc): State<ContractService>) -> Response {
    match svc.list_tools() {
        Ok(listing) => Json(listing).into_response(),
        Err(e) => Json(ToolsUnavailable {
            error: e.to_string(),
            status: TOOLS_UNAVAILABLE_STATUS,
        })
        .into_response(),
    }
}

/// POST `/chat` — malformed bodies are rejected by the extractor before this runs
pub async fn chat_handler(
    State(svc): State<ContractService>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(svc.chat(&request))
}
