//! Vault Garden HTTP Server
//!
//! Thin axum shell over `garden-core`: published pages as HTML, canvas data
//! as JSON, raw vault files for embedded images, and admin routes to scan
//! the vault and toggle publish state.

pub mod routes;
pub mod templates;

pub use routes::{create_router, AppState, HttpError};

use garden_core::PublishingService;

/// Serve the site on `port` until the process is stopped
///
/// # Errors
///
/// Returns error if the listener cannot bind or the server fails.
pub async fn start_server(service: PublishingService, port: u16) -> anyhow::Result<()> {
    let app = create_router(AppState::new(service));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Vault Garden listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
