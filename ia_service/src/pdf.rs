//! Extração de texto de PDF usando lopdf (processamento local)

use lopdf::Document;

use crate::error::{IaResult, IaServiceError};

/// Extrai o texto de cada página do PDF, na ordem das páginas
///
/// Páginas sem texto (PDF escaneado) resultam em strings vazias; quem chama
/// decide o que fazer com isso. Uma página que falha na extração aborta tudo.
pub fn extract_pdf_pages(pdf_bytes: &[u8]) -> IaResult<Vec<String>> {
    tracing::info!("📄 Extraindo texto do PDF localmente: {} bytes", pdf_bytes.len());

    let document = Document::load_mem(pdf_bytes)
        .map_err(|e| IaServiceError::PdfError(format!("Failed to load PDF: {}", e)))?;

    let pages = document.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    for page_num in pages.keys() {
        let mut text = document.extract_text(&[*page_num]).map_err(|e| {
            IaServiceError::PdfError(format!("Failed to extract text from page {}: {}", page_num, e))
        })?;
        // lopdf fecha cada bloco de texto com '\n'; a quebra entre páginas fica com quem junta
        if text.ends_with('\n') {
            text.pop();
        }
        texts.push(text);
    }

    if texts.iter().all(|t| t.trim().is_empty()) {
        tracing::warn!("⚠️ Nenhum texto extraído do PDF (pode ser PDF de imagens/escaneado)");
    } else {
        tracing::info!("✅ Texto extraído de {} página(s)", texts.len());
    }

    Ok(texts)
}
