//! Serviço de IA do classificador de emails
//!
//! Este crate concentra as dependências externas do backend:
//! - Geração de texto com Google Gemini (`generateContent` via REST)
//! - Extração de texto de PDFs (lopdf, processamento local)
//!
//! O backend HTTP trata ambos como colaboradores: monta o prompt, chama
//! [`GeminiClient::generate_content`] e normaliza a resposta por conta própria.

pub mod error;
pub mod gemini;
pub mod pdf;

pub use error::{IaResult, IaServiceError};
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use pdf::extract_pdf_pages;
