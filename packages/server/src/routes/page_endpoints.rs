//! Public Endpoints
//!
//! - `GET /api/health` - Health check
//! - `GET /` - Published page list
//! - `GET /page/:id` - Rendered note or canvas page
//! - `GET /api/pages/:id/canvas` - Rendered canvas data as JSON
//! - `GET /vault_file/*path` - Raw vault file (images and attachments)

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use garden_core::models::{PageId, RenderedCanvas};
use garden_core::RenderedPage;
use serde::Serialize;

use crate::routes::{AppState, HttpError};
use crate::templates;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let pages = state.service.published_pages().await;
    Html(templates::index_page(&pages, state.service.urls()).into_string())
}

async fn view_page(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Html<String>, HttpError> {
    let markup = match state.service.render_page(PageId(id)).await? {
        RenderedPage::Note { page, html } => templates::note_page(&page, &html),
        RenderedPage::Canvas { page, canvas } => {
            templates::canvas_page(&page, &canvas).map_err(|e| {
                HttpError::with_details("Failed to encode canvas", "INTERNAL_ERROR", e.to_string())
            })?
        }
    };
    Ok(Html(markup.into_string()))
}

async fn canvas_data(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<RenderedCanvas>, HttpError> {
    Ok(Json(state.service.render_canvas(PageId(id)).await?))
}

async fn vault_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, HttpError> {
    let bytes = state.service.read_vault_file(&path).await?;
    Ok(([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response())
}

/// Content type from the file extension
fn content_type(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "md" => "text/markdown; charset=utf-8",
        "txt" => "text/plain; charset=utf-8",
        "canvas" | "json" => "application/json",
        _ => "application/octet-stream",
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/", get(index))
        .route("/page/:id", get(view_page))
        .route("/api/pages/:id/canvas", get(canvas_data))
        .route("/vault_file/*path", get(vault_file))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("img/Photo.PNG"), "image/png");
        assert_eq!(content_type("a.jpeg"), "image/jpeg");
        assert_eq!(content_type("notes/readme"), "application/octet-stream");
    }
}
