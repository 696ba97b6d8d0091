//! Axum route handlers for the two HTML pages.

use askama::Template;
use axum::{extract::State, http::HeaderMap, response::Html};

use crate::errors::AppError;
use crate::page_meta::{base_url, PageMeta};
use crate::state::AppState;

#[derive(Template, Debug)]
#[template(path = "index.html")]
struct LandingTemplate<'a> {
    meta: &'a PageMeta,
}

#[derive(Template, Debug)]
#[template(path = "form.html")]
struct FormTemplate<'a> {
    meta: &'a PageMeta,
}

/// GET /
pub async fn handle_landing(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let meta = PageMeta::landing(&base_url(
        &headers,
        state.config.public_base_url.as_deref(),
    ));
    Ok(Html(LandingTemplate { meta: &meta }.render()?))
}

/// GET /form
pub async fn handle_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let meta = PageMeta::form(&base_url(
        &headers,
        state.config.public_base_url.as_deref(),
    ));
    Ok(Html(FormTemplate { meta: &meta }.render()?))
}
