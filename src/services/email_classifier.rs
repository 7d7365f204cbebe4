//! Serviço de classificação de emails
//!
//! Fluxo único para texto e arquivo: monta o prompt, chama o Gemini, remove
//! markdown e faz o parse. A diferença entre os dois caminhos é só como as
//! falhas chegam ao cliente:
//! - texto: resposta malformada vira `Indefinido`, demais falhas sobem como erro
//! - arquivo: qualquer falha vira um registro `Erro`

use ia_service::{extract_pdf_pages, GeminiClient, IaServiceError};
use thiserror::Error;

use super::prompts::{build_file_prompt, build_text_prompt};
use super::response_parser::parse_model_reply;
use crate::models::{ClassificationResult, DocumentKind, ExtractedDocument};
use crate::utils::logging::*;
use crate::utils::truncate_with_suffix;

/// Falhas internas da classificação
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Chamada ao modelo falhou (rede, status da API, cota, timeout)
    #[error("{0}")]
    Upstream(#[from] IaServiceError),

    /// Resposta do modelo não é o JSON esperado
    #[error("{0}")]
    MalformedReply(#[from] serde_json::Error),

    /// Arquivo não pôde ser decodificado/extraído
    #[error("{0}")]
    FileRead(String),
}

#[derive(Clone, Debug)]
pub struct EmailClassifier {
    gemini: GeminiClient,
    max_file_chars: usize,
}

impl EmailClassifier {
    pub fn new(gemini: GeminiClient, max_file_chars: usize) -> Self {
        Self {
            gemini,
            max_file_chars,
        }
    }

    pub fn model(&self) -> &str {
        self.gemini.model()
    }

    /// Classifica texto digitado
    ///
    /// Resposta que não é JSON válido vira o registro `Indefinido`; qualquer
    /// outra falha volta como `Err` para o handler responder 500.
    pub async fn classify_text(&self, content: &str) -> Result<ClassificationResult, ClassifierError> {
        let prompt = build_text_prompt(content);

        let raw_reply = self.gemini.generate_content(&prompt).await.map_err(|e| {
            log_upstream_error("classify_text", &e.to_string());
            ClassifierError::from(e)
        })?;

        match parse_model_reply(&raw_reply) {
            Ok(result) => {
                log_classification_result("texto", result.category.as_str());
                Ok(result)
            }
            Err(e) => {
                log_model_reply_malformed(&e.to_string(), &truncate_with_suffix(&raw_reply, 500, "..."));
                Ok(ClassificationResult::undefined())
            }
        }
    }

    /// Classifica o conteúdo de um arquivo PDF ou TXT
    ///
    /// Nunca falha: formato desconhecido e qualquer erro de leitura, chamada
    /// ou parse viram um registro com categoria `Erro`.
    pub async fn classify_file(&self, bytes: &[u8], filename: &str) -> ClassificationResult {
        let Some(kind) = DocumentKind::from_filename(filename) else {
            log_file_rejected(filename, "formato não suportado");
            return ClassificationResult::unsupported_format();
        };

        match self.classify_document(bytes, kind).await {
            Ok(result) => {
                log_classification_result("arquivo", result.category.as_str());
                result
            }
            Err(e) => {
                log_warning(&format!("⚠️ Falha ao classificar arquivo '{}': {}", filename, e));
                ClassificationResult::file_failure(e)
            }
        }
    }

    async fn classify_document(
        &self,
        bytes: &[u8],
        kind: DocumentKind,
    ) -> Result<ClassificationResult, ClassifierError> {
        let document = extract_document(bytes, kind)?;

        if document.char_count() > self.max_file_chars {
            log_info(&format!(
                "✂️ Conteúdo truncado de {} para {} caracteres",
                document.char_count(),
                self.max_file_chars
            ));
        }

        let prompt = build_file_prompt(document.truncated(self.max_file_chars));
        let raw_reply = self.gemini.generate_content(&prompt).await?;

        Ok(parse_model_reply(&raw_reply)?)
    }
}

/// Extrai o texto do arquivo conforme o formato
pub fn extract_document(bytes: &[u8], kind: DocumentKind) -> Result<ExtractedDocument, ClassifierError> {
    match kind {
        DocumentKind::Pdf => {
            let pages = extract_pdf_pages(bytes).map_err(|e| ClassifierError::FileRead(e.to_string()))?;
            Ok(ExtractedDocument::from_pages(pages))
        }
        DocumentKind::Txt => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| ClassifierError::FileRead(format!("invalid UTF-8: {}", e)))?;
            Ok(ExtractedDocument::from_text(text))
        }
    }
}
