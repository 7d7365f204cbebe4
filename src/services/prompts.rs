//! Templates de instrução enviados ao Gemini
//!
//! O texto do email entra entre aspas, sem escape: o modelo recebe o
//! conteúdo exatamente como o usuário enviou.

/// Prompt completo usado para texto digitado (`/analyze`)
pub fn build_text_prompt(content: &str) -> String {
    format!(
        r#"Atue como um classificador de emails corporativos especializado.
Analise o texto abaixo e retorne APENAS um JSON (sem markdown, sem aspas extras) com dois campos:
1. "category": Deve ser exatamente "Produtivo" ou "Improdutivo".
2. "response": Uma sugestão de resposta curta e polida para o remetente.

Email para análise:
"{}"

Exemplos de classificação:
- "Solicito orçamento", "Erro no sistema" -> Produtivo
- "Feliz Natal", "Obrigado", "Bom dia" -> Improdutivo
"#,
        content
    )
}

/// Prompt reduzido usado para arquivos (`/analyze-file`), sem exemplos
///
/// `content` já deve chegar truncado pelo chamador.
pub fn build_file_prompt(content: &str) -> String {
    format!(
        r#"Atue como um classificador de emails corporativos especializado.
Analise o texto abaixo e retorne APENAS um JSON com "category" (Produtivo/Improdutivo) e "response".

Conteúdo do arquivo:
"{}"
"#,
        content
    )
}
