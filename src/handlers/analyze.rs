use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    http::Uri,
    response::Json,
};
use std::sync::Arc;
use tokio::time::Instant;

use crate::models::{ClassificationRequest, ClassificationResult};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

/// `POST /` e `POST /analyze`
///
/// Falhas do Gemini (rede, cota, status de erro) respondem 500 com `detail`.
pub async fn analyze_email(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    payload: Result<Json<ClassificationRequest>, JsonRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let start_time = Instant::now();
    log_request_received(uri.path(), "POST");

    let Json(request) = payload.map_err(|rejection| {
        log_validation_error("content", &rejection.body_text());
        AppError::from(rejection)
    })?;

    let result = state.classifier.classify_text(&request.content).await?;

    log_request_processed(uri.path(), 200, start_time.elapsed().as_millis() as u64);
    Ok(Json(result))
}

/// `POST /analyze-file`
///
/// Sempre 200 quando o formulário é válido; problemas com o arquivo ou com
/// o Gemini voltam no corpo com categoria `Erro`.
pub async fn analyze_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let start_time = Instant::now();
    log_request_received("/analyze-file", "POST");

    let mut multipart = multipart.map_err(|rejection| {
        log_validation_error("file", &rejection.body_text());
        AppError::from(rejection)
    })?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        log_validation_error("file", "campo ausente");
        AppError::ValidationError("Campo 'file' ausente no formulário multipart".to_string())
    })?;

    log_file_received(&filename, bytes.len());

    let result = state.classifier.classify_file(&bytes, &filename).await;

    log_request_processed("/analyze-file", 200, start_time.elapsed().as_millis() as u64);
    Ok(Json(result))
}
