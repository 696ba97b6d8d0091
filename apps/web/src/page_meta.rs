//! Page metadata handed to the HTML templates (title, social preview, canonical URL).

use axum::http::{header, HeaderMap};

pub const SITE_NAME: &str = "GeneratorCV";

const META_DESCRIPTION: &str = "Preencha seus dados e baixe um curriculo profissional em PDF \
     em poucos segundos, sem cadastro.";
const PREVIEW_IMAGE: &str = "og-image.svg";

/// Values every page template renders into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
    pub canonical_url: String,
    pub meta_image: String,
}

impl PageMeta {
    /// Metadata for `GET /`. `base_url` must end with `/`.
    pub fn landing(base_url: &str) -> Self {
        PageMeta {
            title: SITE_NAME.to_string(),
            meta_title: format!("{SITE_NAME} | Gere seu curriculo em PDF"),
            meta_description: META_DESCRIPTION.to_string(),
            canonical_url: base_url.to_string(),
            meta_image: format!("{base_url}{PREVIEW_IMAGE}"),
        }
    }

    /// Metadata for `GET /form`. `base_url` must end with `/`.
    pub fn form(base_url: &str) -> Self {
        let title = format!("Gerar curriculo | {SITE_NAME}");
        PageMeta {
            meta_title: title.clone(),
            title,
            meta_description: META_DESCRIPTION.to_string(),
            canonical_url: format!("{base_url}form"),
            meta_image: format!("{base_url}{PREVIEW_IMAGE}"),
        }
    }
}

/// Root URL of the site as seen by the client, always ending with `/`.
///
/// A configured URL wins. Otherwise the scheme comes from `X-Forwarded-Proto`
/// (default `http`) and the host from `X-Forwarded-Host`, then `Host`.
pub fn base_url(headers: &HeaderMap, configured: Option<&str>) -> String {
    if let Some(url) = configured {
        return with_trailing_slash(url);
    }

    let scheme = first_header_value(headers, "x-forwarded-proto").unwrap_or("http");
    let host = first_header_value(headers, "x-forwarded-host")
        .or_else(|| first_header_value(headers, header::HOST.as_str()))
        .unwrap_or("localhost");

    format!("{scheme}://{host}/")
}

/// First comma-separated value of a header; proxies may append their own.
fn first_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .map(str::trim)
        .find(|value| !value.is_empty())
}

fn with_trailing_slash(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    format!("{trimmed}/")
}
