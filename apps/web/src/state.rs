use std::sync::Arc;

use genpdf::fonts::{FontData, FontFamily};

use crate::config::Config;
use crate::document::{load_font_family, DocumentError};

/// Shared application state injected into route handlers via Axum extractors.
///
/// Read-only: requests never share anything mutable, so a plain clone per
/// handler is all the coordination there is.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Parsed once at startup; each PDF render takes its own copy.
    pub fonts: Arc<FontFamily<FontData>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, DocumentError> {
        let fonts = load_font_family(&config.font_dir)?;
        Ok(AppState {
            config,
            fonts: Arc::new(fonts),
        })
    }
}
