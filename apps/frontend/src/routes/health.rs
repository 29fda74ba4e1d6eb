use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports this service's version and whether the collaborator answers its own probe.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let backend = match state.controller.backend_health().await {
        Ok(h) => json!({ "status": h.status, "service": h.service }),
        Err(e) => {
            tracing::warn!("Collaborator health probe failed: {e}");
            json!({ "status": "unreachable" })
        }
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-frontend",
        "api_base_url": state.config.api_base_url,
        "backend": backend
    }))
}
