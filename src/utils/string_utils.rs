/// Utilitários para manipulação segura de strings UTF-8

/// Retorna os primeiros `max_chars` caracteres da string
///
/// Conta caracteres Unicode (não bytes), então nunca corta um caractere
/// multibyte no meio. Não aloca: devolve uma fatia da string original.
///
/// # Exemplo
/// ```
/// use autou_backend::utils::string_utils::truncate_chars;
///
/// assert_eq!(truncate_chars("Olá, mundo!", 3), "Olá");
/// assert_eq!(truncate_chars("abc", 10), "abc");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &s[..byte_index],
        None => s,
    }
}

/// Trunca para log, adicionando um sufixo (como "...") quando houver corte
pub fn truncate_with_suffix(s: &str, max_chars: usize, suffix: &str) -> String {
    let truncated = truncate_chars(s, max_chars);
    if truncated.len() < s.len() {
        format!("{}{}", truncated, suffix)
    } else {
        truncated.to_string()
    }
}
