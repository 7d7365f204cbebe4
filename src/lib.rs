// Biblioteca do backend de classificação de emails
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod utils;

use ia_service::{GeminiClient, GeminiConfig};

pub use router::build_router;

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub classifier: services::EmailClassifier,
}

impl AppState {
    /// Monta o estado somente-leitura a partir das configurações
    pub fn from_settings(settings: config::Settings) -> utils::AppResult<Self> {
        let gemini_config = GeminiConfig::new(settings.gemini.api_key.clone())
            .with_model(settings.gemini.model.clone())
            .with_base_url(settings.gemini.base_url.clone())
            .with_timeout_secs(settings.gemini.timeout_seconds)
            .with_connect_timeout_secs(settings.gemini.connect_timeout_seconds);

        let gemini = GeminiClient::new(gemini_config)
            .map_err(|e| utils::AppError::ConfigError(format!("Failed to create Gemini client: {}", e)))?;

        let classifier = services::EmailClassifier::new(gemini, settings.limits.max_file_chars);

        Ok(Self { settings, classifier })
    }
}
