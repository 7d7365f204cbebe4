//! Tipos de erro para o crate ia-service

use thiserror::Error;

/// Erros do serviço de IA
#[derive(Debug, Error)]
pub enum IaServiceError {
    /// Erro de requisição HTTP (conexão, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API do Gemini (status code não-2xx)
    #[error("Gemini API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Resposta sem texto utilizável (candidato bloqueado ou vazio)
    #[error("Gemini returned no text: {0}")]
    EmptyResponse(String),

    /// Erro ao carregar ou extrair texto do PDF
    #[error("PDF error: {0}")]
    PdfError(String),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type IaResult<T> = Result<T, IaServiceError>;
