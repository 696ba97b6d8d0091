pub mod generate;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Builds the application router. Anything that is not a page or `/generate`
/// is looked up in the static directory.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::handle_landing))
        .route("/form", get(pages::handle_form))
        .route("/generate", post(generate::handle_generate))
        .fallback_service(static_files)
        .with_state(state)
}
