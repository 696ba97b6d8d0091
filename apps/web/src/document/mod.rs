//! Résumé document pipeline: sanitize fields, build the story of styled
//! blocks, and let `genpdf` wrap and paginate it onto A4 pages.
//!
//! Building is CPU-bound; HTTP handlers run it inside `tokio::task::spawn_blocking`.

pub mod builder;
pub mod fonts;
pub mod pdf;
pub mod sanitize;
pub mod slug;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use thiserror::Error;

pub use builder::build_pdf;
pub use fonts::load_font_family;
pub use slug::download_filename;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to load font {}: {source}", path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: genpdf::error::Error,
    },

    #[error("failed to render PDF: {0}")]
    Render(#[from] genpdf::error::Error),

    #[error("failed to update PDF metadata: {0}")]
    Encode(#[from] lopdf::Error),

    #[error("failed to write PDF: {0}")]
    Write(#[from] std::io::Error),
}
