//! TrueType font loading for the PDF renderer.
//!
//! The résumé uses one sans family in two weights. The files are embedded as
//! Unicode fonts, so Cyrillic, Greek, Hebrew and accented Latin text keeps its
//! glyphs instead of being squeezed through a single-byte encoding.

use std::path::{Path, PathBuf};

use genpdf::fonts::{FontData, FontFamily};

use crate::document::DocumentError;

pub const REGULAR_FILE: &str = "DejaVuSans.ttf";
pub const BOLD_FILE: &str = "DejaVuSans-Bold.ttf";

/// Loads the regular and bold faces from `dir`.
///
/// The résumé never prints italics, so the italic slots reuse the upright
/// faces.
pub fn load_font_family(dir: &Path) -> Result<FontFamily<FontData>, DocumentError> {
    let regular = load_face(dir.join(REGULAR_FILE))?;
    let bold = load_face(dir.join(BOLD_FILE))?;

    Ok(FontFamily {
        italic: regular.clone(),
        bold_italic: bold.clone(),
        regular,
        bold,
    })
}

fn load_face(path: PathBuf) -> Result<FontData, DocumentError> {
    FontData::load(&path, None).map_err(|source| DocumentError::Font { path, source })
}

#[cfg(test)]
pub(crate) fn bundled_font_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fonts")
}
