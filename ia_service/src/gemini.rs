//! Cliente Gemini: geração de texto via endpoint REST `generateContent`
//!
//! Mesma abordagem do antigo serviço Vertex AI do middleware: corpo montado
//! com `contents/parts`, texto lido de `candidates[0].content.parts[*].text`.
//! A autenticação usa API key (`x-goog-api-key`) em vez de token OAuth.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{IaResult, IaServiceError};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "models/gemini-2.5-flash";

/// Configuração do cliente Gemini
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key do Google AI Studio (GOOGLE_API_KEY)
    pub api_key: String,
    /// Identificador do modelo (padrão: models/gemini-2.5-flash)
    pub model: String,
    /// URL base da API (sobrescrita nos testes)
    pub base_url: String,
    /// Timeout total da chamada em segundos (padrão: 60)
    pub timeout_secs: u64,
    /// Timeout de conexão em segundos (padrão: 5)
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 5,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Cliente do Gemini, construído uma única vez na inicialização
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> IaResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| IaServiceError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!("✅ GeminiClient inicializado com modelo: {}", config.model);

        Ok(Self { http_client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        let model = if self.config.model.starts_with("models/") {
            self.config.model.clone()
        } else {
            format!("models/{}", self.config.model)
        };

        format!(
            "{}/v1beta/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Envia o prompt ao modelo e devolve o texto bruto da resposta
    ///
    /// O texto é a concatenação das `parts` do primeiro candidato. Nenhuma
    /// limpeza é feita aqui: remoção de markdown e parsing ficam com o chamador.
    pub async fn generate_content(&self, prompt: &str) -> IaResult<String> {
        tracing::info!("🤖 Chamando Gemini ({}) com prompt de {} chars", self.config.model, prompt.chars().count());

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_text);

            tracing::error!("❌ Gemini API error: Status {} - {}", status, message);

            return Err(IaServiceError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        extract_text(payload)
    }
}

fn extract_text(payload: GenerateContentResponse) -> IaResult<String> {
    let candidate = match payload.candidates.into_iter().next() {
        Some(candidate) => candidate,
        None => {
            let reason = payload
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(IaServiceError::EmptyResponse(reason));
        }
    };

    let texts: Vec<String> = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if texts.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "candidate without text parts".to_string());
        return Err(IaServiceError::EmptyResponse(reason));
    }

    let text = texts.concat();
    tracing::debug!("📋 Resposta do Gemini: {}", text);

    Ok(text)
}
