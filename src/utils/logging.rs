use tracing::{info, warn, error, debug};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_classification_result(source: &str, category: &str) {
    info!("🏷️ Classificação ({}): {}", source, category);
}

pub fn log_model_reply_malformed(error: &str, raw_reply: &str) {
    warn!("⚠️ Resposta da IA não é JSON válido: {} - Resposta: {}", error, raw_reply);
}

pub fn log_upstream_error(operation: &str, error: &str) {
    error!("❌ Falha na chamada ao Gemini ({}): {}", operation, error);
}

pub fn log_file_received(filename: &str, size_bytes: usize) {
    info!("📎 Arquivo recebido: {} ({} bytes)", filename, size_bytes);
}

pub fn log_file_rejected(filename: &str, reason: &str) {
    warn!("🚫 Arquivo rejeitado: {} - {}", filename, reason);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 AutoU email classifier starting on port {}", port);
}

pub fn log_server_ready(address: &str) {
    info!("✅ Server ready and listening on http://{}", address);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
