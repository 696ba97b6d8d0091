//! PDF rendering of a résumé story.
//!
//! `genpdf` owns wrapping, pagination and font metrics; this module only maps
//! styled blocks onto its elements. A second pass with `lopdf` rewrites the
//! information dictionary so title and author are proper UTF-16 text strings.

use chrono::{DateTime, Utc};
use genpdf::elements::{Break, LinearLayout, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::{Element as _, Margins, Mm, PaperSize, SimplePageDecorator};
use lopdf::{Object, StringFormat};
use unicode_normalization::UnicodeNormalization as _;

use crate::document::sanitize::parse_markup;
use crate::document::DocumentError;

/// Margin on every side of the page, in points.
pub const PAGE_MARGIN: f64 = 48.0;
const A4_WIDTH: f64 = 595.2756;
const TEXT_WIDTH: f64 = A4_WIDTH - 2.0 * PAGE_MARGIN;
/// Widest advance of any glyph the résumé is likely to print, in em.
const WIDEST_GLYPH_EM: f64 = 1.2;

pub const PRODUCER: &str = "GeneratorCV";

/// Style attributes of one block. Sizes are whole points, as `genpdf` takes
/// them; spacing is in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub bold: bool,
    pub font_size: u8,
    /// Multiple of the face's natural line height (about 1.16 em).
    pub line_spacing: f64,
    pub color: (u8, u8, u8),
    pub space_before: f64,
    pub space_after: f64,
}

impl TextStyle {
    fn to_style(self) -> Style {
        let (r, g, b) = self.color;
        let mut style = Style::new()
            .with_font_size(self.font_size)
            .with_line_spacing(self.line_spacing)
            .with_color(Color::Rgb(r, g, b));
        if self.bold {
            style.set_bold();
        }
        style
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Escaped text with `<br/>` hard breaks.
    Paragraph { markup: String, style: TextStyle },
    /// Vertical gap in points.
    Spacer(f64),
}

/// Entries of the document information dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

/// Renders `story` onto A4 pages and returns the finished PDF file.
pub fn render_pdf(
    story: &[Block],
    fonts: FontFamily<FontData>,
    info: &DocumentInfo,
) -> Result<Vec<u8>, DocumentError> {
    let mut document = genpdf::Document::new(fonts);
    document.set_title(info.title.as_str());
    document.set_minimal_conformance();
    document.set_paper_size(PaperSize::A4);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(Margins::all(points(PAGE_MARGIN)));
    document.set_page_decorator(decorator);

    for block in story {
        document.push(block_element(block));
    }

    let mut rendered = Vec::new();
    document.render(&mut rendered)?;
    stamp_info(&rendered, info)
}

fn block_element(block: &Block) -> impl genpdf::Element {
    match block {
        Block::Paragraph { markup, style } => {
            let mut lines = LinearLayout::vertical();
            for line in parse_markup(markup) {
                if line.trim().is_empty() {
                    lines.push(Break::new(1.0));
                } else {
                    lines.push(Paragraph::new(prepare_line(&line, style.font_size)));
                }
            }
            lines
                .styled(style.to_style())
                .padded(vertical_margins(style.space_before, style.space_after))
        }
        Block::Spacer(height) => LinearLayout::vertical()
            .styled(Style::new())
            .padded(vertical_margins(*height, 0.0)),
    }
}

fn vertical_margins(before: f64, after: f64) -> Margins {
    Margins::trbl(points(before), points(0.0), points(after), points(0.0))
}

fn points(pt: f64) -> Mm {
    Mm::from(pt * 25.4 / 72.0)
}

/// NFC-composes a hard line and breaks its overlong words. The renderer does
/// no shaping, so "e" + U+0301 must become the single glyph "é".
fn prepare_line(line: &str, font_size: u8) -> String {
    break_long_words(&line.nfc().collect::<String>(), font_size)
}

/// Cuts words that cannot fit on one line at `font_size` into line-sized
/// pieces, so the wrapper never meets a word wider than the text column.
pub fn break_long_words(line: &str, font_size: u8) -> String {
    let limit = (TEXT_WIDTH / (f64::from(font_size.max(1)) * WIDEST_GLYPH_EM)).floor() as usize;
    let limit = limit.max(1);

    line.split(' ')
        .map(|word| {
            if word.chars().count() <= limit {
                return word.to_string();
            }
            word.chars()
                .collect::<Vec<_>>()
                .chunks(limit)
                .map(|piece| piece.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrites Title, Author, Producer and CreationDate in the rendered file.
fn stamp_info(rendered: &[u8], info: &DocumentInfo) -> Result<Vec<u8>, DocumentError> {
    let mut document = lopdf::Document::load_mem(rendered)?;

    let entries = [
        ("Title", text_string(&info.title)),
        ("Author", text_string(&info.author)),
        ("Producer", text_string(PRODUCER)),
        ("CreationDate", Object::string_literal(pdf_date(&info.created))),
    ];

    let info_id = match document.trailer.get(b"Info").and_then(Object::as_reference) {
        Ok(id) => id,
        Err(_) => {
            let id = document.add_object(lopdf::Dictionary::new());
            document.trailer.set("Info", id);
            id
        }
    };
    let dictionary = document.get_dictionary_mut(info_id)?;
    for (key, value) in entries {
        dictionary.set(key, value);
    }

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

/// A PDF text string: UTF-16BE behind a byte-order mark.
pub fn text_string(text: &str) -> Object {
    let mut bytes = vec![0xfe, 0xff];
    bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// `D:YYYYMMDDHHmmSSZ`
fn pdf_date(date: &DateTime<Utc>) -> String {
    format!("D:{}Z", date.format("%Y%m%d%H%M%S"))
}
