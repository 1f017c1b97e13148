use axum::extract::State;

use crate::app::state::SharedState;

pub async fn version(State(state): State<SharedState>) -> String {
    format!("{}\n", state.config.app_version)
}

pub async fn live() -> &'static str {
    "up\n"
}

pub async fn ready() -> &'static str {
    "yes\n"
}
