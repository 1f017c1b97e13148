use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::app::state::SharedState;
use crate::handlers::{health, pages};

pub fn build_router(state: SharedState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/version", get(health::version))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/", get(pages::home).post(pages::home))
        .route("/index.html", get(pages::index_redirect))
        .route("/diagram.svg", get(pages::diagram))
        .fallback_service(assets)
        .with_state(state)
}
