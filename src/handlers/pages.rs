use std::collections::HashMap;
use std::path::Path;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Form,
};
use tracing::debug;

use crate::app::state::SharedState;
use crate::handlers::error::AppError;
use crate::models::page::{DiagramView, HomeView};
use crate::models::quote::parse_amount;
use crate::utils::template::render;

const INDEX_PAGE: &str = "index.html";
const DIAGRAM_PAGE: &str = "diagram.svg";

/// Reads the variant's field from the urlencoded body first, then from the
/// query string.
pub async fn home(
    State(state): State<SharedState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let field = state.config.variant.form_field();

    let from_body = match form {
        Ok(Form(mut fields)) => fields.remove(field),
        Err(rejection) => {
            debug!("Ignoring unreadable form: {}", rejection);
            None
        }
    };
    let raw = from_body
        .or_else(|| query.ok().and_then(|Query(mut params)| params.remove(field)))
        .unwrap_or_default();

    let amount = parse_amount(&raw);
    let backend_version = state.quotes.backend_version().await;
    let result = state.quotes.quote_for(amount).await;

    let view = HomeView::new(&state.config, backend_version, amount, result);
    let page = read_page(&state.config.static_dir, INDEX_PAGE).await?;

    Ok(Html(render(&page, &view.placeholders())))
}

/// The page template is never served raw; `/index.html` goes back to `/`.
pub async fn index_redirect() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/")])
}

pub async fn diagram(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let view = DiagramView {
        frontend_version: state.config.app_version.clone(),
        backend_version: state.quotes.backend_version().await,
    };
    let page = read_page(&state.config.static_dir, DIAGRAM_PAGE).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::ACCEPT_RANGES, "bytes"),
        ],
        render(&page, &view.placeholders()),
    ))
}

async fn read_page(static_dir: &Path, name: &str) -> Result<String, AppError> {
    let path = static_dir.join(name);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| AppError::PageUnreadable {
            path: path.display().to_string(),
            source,
        })
}
