//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::pages;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No page at the path, or no post with the slug.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Blocking report task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Internal(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(path) => {
                tracing::debug!(path = %path, "Not found");
                (
                    StatusCode::NOT_FOUND,
                    Html(pages::error::not_found().into_string()),
                )
                    .into_response()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                let page = pages::error::generate(
                    500,
                    "Something went wrong",
                    "The page could not be generated. Please try again later.",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
            }
        }
    }
}
