use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{analyze_email, analyze_file, health_check, root_status};
use crate::AppState;

/// Rotas públicas da API
///
/// CORS totalmente aberto: o frontend roda em outro domínio e não há
/// autenticação. Restringir as origens antes de expor em produção.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.settings.server.max_upload_bytes;

    Router::new()
        .route("/", get(root_status).post(analyze_email))
        .route("/analyze", post(analyze_email))
        .route("/analyze-file", post(analyze_file))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
