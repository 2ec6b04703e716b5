//! HTTP error handling
//!
//! The pipeline never fails past its own boundary, so the only error a page
//! handler can hit is a template that does not render. Details are logged,
//! not sent to the browser.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use infrastructure::TemplateError;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// A page template failed to render
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Template(e) => {
                error!(error = %e, "Failed to render page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                )
                    .into_response()
            },
        }
    }
}
