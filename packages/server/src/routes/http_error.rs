//! HTTP error handling
//!
//! Every failing route answers with the same JSON body
//! `{message, code, details?}`; the status is derived from `code`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use garden_core::PublishError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Optional detailed error information for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpError {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn with_details(
        message: impl Into<String>,
        code: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: Some(details.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, "RESOURCE_NOT_FOUND")
    }

    pub fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "PAGE_NOT_FOUND" | "RESOURCE_NOT_FOUND" => StatusCode::NOT_FOUND,
            "INVALID_INPUT" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<PublishError> for HttpError {
    fn from(err: PublishError) -> Self {
        match &err {
            PublishError::PageNotFound { id } => {
                HttpError::new(format!("Page not found: {}", id), "PAGE_NOT_FOUND")
            }
            e if e.is_not_found() => HttpError::not_found(e.to_string()),
            PublishError::Render(e) => {
                tracing::error!("Render failed: {}", e);
                HttpError::with_details("Failed to render page", "RENDER_ERROR", e.to_string())
            }
            PublishError::Scan(e) => {
                tracing::error!("Vault scan failed: {}", e);
                HttpError::with_details("Failed to scan vault", "SCAN_ERROR", e.to_string())
            }
            e => {
                tracing::error!("Request failed: {}", e);
                HttpError::new(e.to_string(), "INTERNAL_ERROR")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::models::PageId;

    #[test]
    fn test_publish_errors_map_to_status() {
        let not_found: HttpError = PublishError::page_not_found(PageId(3)).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.code, "PAGE_NOT_FOUND");

        let other = HttpError::new("boom", "RENDER_ERROR");
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let json = serde_json::to_value(HttpError::new("Nope", "INVALID_INPUT")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Nope", "code": "INVALID_INPUT"}));
    }
}
