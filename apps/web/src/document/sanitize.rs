//! String cleanup for submitted résumé fields.
//!
//! Paragraph bodies are carried as a tiny markup: HTML-escaped text with
//! `<br/>` marking hard line breaks. [`parse_markup`] is the inverse, applied
//! when blocks are handed to the PDF renderer.

/// Hard line-break marker inside paragraph markup.
pub const LINE_BREAK: &str = "<br/>";

/// Trims a field; an absent field becomes the empty string.
pub fn clean_text(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

/// Escapes the characters that are significant in paragraph markup.
pub fn escape_markup(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds the markup for a paragraph body.
///
/// Blank input yields `fallback` untouched (it is a trusted default). Anything
/// else is escaped and every line break becomes [`LINE_BREAK`].
pub fn paragraph(text: Option<&str>, fallback: &str) -> String {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        return fallback.to_string();
    }
    escape_markup(&cleaned)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', LINE_BREAK)
}

/// Normalizes a free-text skills field into `"a | b | c"`.
///
/// Pieces are split on commas and newlines; blank pieces are dropped.
pub fn format_skills(text: Option<&str>) -> String {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        return String::new();
    }
    cleaned
        .split([',', '\n'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Splits paragraph markup into hard lines of plain text.
pub fn parse_markup(markup: &str) -> Vec<String> {
    markup.split(LINE_BREAK).map(unescape_markup).collect()
}

fn unescape_markup(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#x27;", '\''),
            ("&#39;", '\''),
        ]
        .iter()
        .find(|(entity, _)| rest.starts_with(entity));
        match decoded {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
