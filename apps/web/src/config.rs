use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
/// Asset directories default to the crate's own `public/` and `fonts/`, so the
/// binary works from any working directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory served for stylesheets, favicon and the social preview image.
    pub static_dir: PathBuf,
    /// Directory holding the regular and bold TrueType faces.
    pub font_dir: PathBuf,
    /// Overrides the base URL otherwise derived from request headers.
    pub public_base_url: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let port = match std::env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            Err(_) => defaults.port,
        };

        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            font_dir: std::env::var("FONT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.font_dir),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .ok()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public")),
            font_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fonts")),
            public_base_url: None,
            rust_log: "info".to_string(),
        }
    }
}
