//! Text extraction for assertions on rendered PDFs.
//!
//! Embedded fonts show glyph ids, not characters, so shown strings are mapped
//! back through each font's ToUnicode CMap.

use std::collections::HashMap;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object};

type UnicodeMap = HashMap<u32, String>;

/// Every shown string, in content order, across all pages.
pub fn shown_text(bytes: &[u8]) -> Vec<String> {
    let document = Document::load_mem(bytes).unwrap();
    let mut shown = Vec::new();

    for (_, page_id) in document.get_pages() {
        let fonts: HashMap<Vec<u8>, UnicodeMap> = document
            .get_page_fonts(page_id)
            .into_iter()
            .map(|(name, font)| (name, to_unicode_map(&document, font)))
            .collect();
        let content = Content::decode(&document.get_page_content(page_id).unwrap()).unwrap();

        let mut current: Option<&UnicodeMap> = None;
        for operation in &content.operations {
            match operation.operator.as_str() {
                "Tf" => {
                    current = operation
                        .operands
                        .first()
                        .and_then(|name| name.as_name().ok())
                        .and_then(|name| fonts.get(name));
                }
                "Tj" | "'" | "\"" => {
                    if let (Some(map), Some(Object::String(glyphs, _))) =
                        (current, operation.operands.last())
                    {
                        shown.push(decode(map, glyphs));
                    }
                }
                "TJ" => {
                    if let (Some(map), Some(Object::Array(parts))) =
                        (current, operation.operands.first())
                    {
                        let text = parts
                            .iter()
                            .filter_map(|part| match part {
                                Object::String(glyphs, _) => Some(decode(map, glyphs)),
                                _ => None,
                            })
                            .collect::<String>();
                        shown.push(text);
                    }
                }
                _ => {}
            }
        }
    }
    shown
}

/// All shown text concatenated with whitespace removed, since word spacing
/// may come from positioning rather than space glyphs.
pub fn compact_text(bytes: &[u8]) -> String {
    shown_text(bytes)
        .concat()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// A text-string entry of the information dictionary, decoded.
pub fn info_entry(bytes: &[u8], key: &[u8]) -> String {
    let document = Document::load_mem(bytes).unwrap();
    let info_id = document.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let value = document.get_dictionary(info_id).unwrap().get(key).unwrap();
    let raw = value.as_str().unwrap();
    match raw.strip_prefix(&[0xfe, 0xff]) {
        Some(utf16) => {
            let units: Vec<u16> = utf16
                .chunks(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).unwrap()
        }
        None => String::from_utf8_lossy(raw).into_owned(),
    }
}

fn decode(map: &UnicodeMap, glyphs: &[u8]) -> String {
    glyphs
        .chunks(2)
        .map(|pair| {
            let gid = pair.iter().fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));
            map.get(&gid).map(String::as_str).unwrap_or("\u{fffd}").to_string()
        })
        .collect()
}

fn to_unicode_map(document: &Document, font: &Dictionary) -> UnicodeMap {
    let stream = font
        .get(b"ToUnicode")
        .and_then(Object::as_reference)
        .and_then(|id| document.get_object(id))
        .and_then(Object::as_stream);
    let Ok(stream) = stream else {
        return UnicodeMap::new();
    };
    let data = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());
    parse_cmap(&String::from_utf8_lossy(&data))
}

/// Reads `bfchar` and `bfrange` entries of a ToUnicode CMap.
fn parse_cmap(cmap: &str) -> UnicodeMap {
    let mut map = UnicodeMap::new();
    let mut section = "";
    let mut pending: Vec<&str> = Vec::new();

    for token in cmap.split_whitespace() {
        match token {
            "beginbfchar" | "beginbfrange" => {
                section = token;
                pending.clear();
            }
            "endbfchar" | "endbfrange" => section = "",
            _ if !section.is_empty() && token.starts_with('<') && token.ends_with('>') => {
                pending.push(&token[1..token.len() - 1]);
                let arity = if section == "beginbfchar" { 2 } else { 3 };
                if pending.len() < arity {
                    continue;
                }
                let src = u32::from_str_radix(pending[0], 16).unwrap_or(0);
                if arity == 2 {
                    map.insert(src, hex_to_string(pending[1]));
                } else {
                    let end = u32::from_str_radix(pending[1], 16).unwrap_or(src);
                    let base = u32::from_str_radix(pending[2], 16).unwrap_or(0);
                    for (offset, gid) in (src..=end).enumerate() {
                        if let Some(c) = char::from_u32(base + offset as u32) {
                            map.insert(gid, c.to_string());
                        }
                    }
                }
                pending.clear();
            }
            _ => {}
        }
    }
    map
}

fn hex_to_string(hex: &str) -> String {
    if hex.len() % 4 != 0 {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default();
    }
    let units: Vec<u16> = (0..hex.len())
        .step_by(4)
        .filter_map(|i| u16::from_str_radix(&hex[i..i + 4], 16).ok())
        .collect();
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cmap_reads_chars_and_ranges() {
        let cmap = "1 beginbfchar\n<0003> <0418>\nendbfchar\n\
                    1 beginbfrange\n<0010> <0012> <0041>\nendbfrange";
        let map = parse_cmap(cmap);
        assert_eq!(map[&3], "И");
        assert_eq!(map[&0x10], "A");
        assert_eq!(map[&0x12], "C");
    }

    #[test]
    fn test_codespace_range_is_not_a_mapping() {
        let map = parse_cmap("1 begincodespacerange\n<0000> <ffff>\nendcodespacerange");
        assert!(map.is_empty());
    }
}
