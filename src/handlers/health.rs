use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::AppState;

/// `GET /`: resposta fixa consumida pelo frontend
pub async fn root_status() -> Json<Value> {
    log_health_check();

    Json(json!({ "status": "API Online 🚀" }))
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "autou-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.classifier.model(),
        "api_key_configured": state.settings.gemini.has_api_key(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
