//! Admin Endpoints
//!
//! - `GET /admin/pages` - Every indexed page with its publish state
//! - `POST /admin/scan` - Index new vault files
//! - `POST /admin/publish/:id` - Toggle a page's publish state
//!
//! No authentication; bind the server to a trusted interface.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use garden_core::models::{PageId, PageRecord};
use garden_core::ScanReport;

use crate::routes::{AppState, HttpError};

async fn list_pages(State(state): State<AppState>) -> Json<Vec<PageRecord>> {
    Json(state.service.all_pages().await)
}

async fn scan_vault(State(state): State<AppState>) -> Result<Json<ScanReport>, HttpError> {
    Ok(Json(state.service.scan().await?))
}

async fn toggle_publish(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PageRecord>, HttpError> {
    Ok(Json(state.service.toggle_publish(PageId(id)).await?))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/admin/pages", get(list_pages))
        .route("/admin/scan", post(scan_vault))
        .route("/admin/publish/:id", post(toggle_publish))
        .with_state(state)
}
