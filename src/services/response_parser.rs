//! Normalização da resposta do modelo
//!
//! Remoção literal das cercas de markdown (```json e ```), seguida de parse
//! estrito para `ClassificationResult`. A heurística é propositalmente
//! simples: mudanças no formato da resposta devem aparecer como falha de
//! parse, não ser mascaradas.

use crate::models::ClassificationResult;

/// Remove as cercas de markdown e espaços nas pontas
pub fn strip_markdown_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Converte o texto bruto do modelo em `ClassificationResult`
///
/// Falha se o texto não for JSON, se faltar `category`/`response` ou se a
/// categoria estiver fora das quatro permitidas.
pub fn parse_model_reply(raw: &str) -> Result<ClassificationResult, serde_json::Error> {
    let cleaned = strip_markdown_fences(raw);
    serde_json::from_str(&cleaned)
}
