//! Tipos de entrada e saída da classificação de emails

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::truncate_chars;

pub const FALLBACK_RESPONSE_MESSAGE: &str =
    "Não foi possível processar a resposta da IA. Tente novamente.";
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Formato não suportado. Use PDF ou TXT.";

/// Corpo de `POST /` e `POST /analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub content: String,
}

/// Rótulo da classificação
///
/// `Produtivo`/`Improdutivo` vêm do modelo; `Indefinido` e `Erro` são
/// produzidos localmente quando a resposta não pode ser usada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Produtivo,
    Improdutivo,
    Indefinido,
    Erro,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produtivo => "Produtivo",
            Category::Improdutivo => "Improdutivo",
            Category::Indefinido => "Indefinido",
            Category::Erro => "Erro",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resultado devolvido ao cliente
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub response: String,
}

impl ClassificationResult {
    pub fn new(category: Category, response: impl Into<String>) -> Self {
        Self {
            category,
            response: response.into(),
        }
    }

    /// Resposta da IA que não pôde ser interpretada como JSON
    pub fn undefined() -> Self {
        Self::new(Category::Indefinido, FALLBACK_RESPONSE_MESSAGE)
    }

    pub fn unsupported_format() -> Self {
        Self::new(Category::Erro, UNSUPPORTED_FORMAT_MESSAGE)
    }

    pub fn file_failure(error: impl fmt::Display) -> Self {
        Self::new(Category::Erro, format!("Falha ao ler arquivo: {}", error))
    }
}

/// Formatos de arquivo aceitos em `/analyze-file`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Txt,
}

impl DocumentKind {
    /// Detecta o formato pela extensão (sensível a maiúsculas)
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if filename.ends_with(".txt") {
            Some(DocumentKind::Txt)
        } else {
            None
        }
    }
}

/// Texto extraído de um arquivo, antes de ir para o prompt
#[derive(Debug, Clone, Default)]
pub struct ExtractedDocument {
    text: String,
}

impl ExtractedDocument {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Junta as páginas do PDF, cada uma seguida de quebra de linha
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for page in pages {
            text.push_str(page.as_ref());
            text.push('\n');
        }
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn truncated(&self, max_chars: usize) -> &str {
        truncate_chars(&self.text, max_chars)
    }
}
