use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not read page {path}: {source}")]
    PageUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Error rendering page: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
