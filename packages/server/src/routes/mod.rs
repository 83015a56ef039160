//! HTTP routes
//!
//! Endpoint modules each build their own `Router` and are merged here:
//!
//! - `page_endpoints`: public pages, canvas data and vault files
//! - `admin_endpoints`: page listing, vault scan and publish toggling

use axum::{http::Request, Router};
use garden_core::PublishingService;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Level;

mod admin_endpoints;
mod http_error;
mod page_endpoints;

pub use http_error::HttpError;

/// Application state shared across all endpoints
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PublishingService>,
}

impl AppState {
    pub fn new(service: PublishingService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(page_endpoints::routes(state.clone()))
        .merge(admin_endpoints::routes(state))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}
