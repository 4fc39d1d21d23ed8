use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Headline message for every 500 response from the analysis endpoint.
pub const ANALYSIS_FAILED: &str = "Failed to analyze resume";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input was rejected before any downstream work.
    #[error("{0}")]
    Validation(String),

    /// The uploaded document could not be parsed. Carries the parser cause.
    #[error("Failed to parse PDF: {0}")]
    Extraction(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Builds the JSON response. With `verbose` set, 500 bodies also carry a
    /// `stack` field holding the full diagnostic chain.
    pub fn into_response_with(self, verbose: bool) -> Response {
        let (status, details, diagnostic) = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {msg}");
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response();
            }
            AppError::Extraction(cause) => {
                tracing::error!("PDF parsing error: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to parse PDF".to_string(),
                    self.to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone(), self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                    format!("{e:?}"),
                )
            }
        };

        let mut body = json!({
            "error": ANALYSIS_FAILED,
            "details": details,
        });
        if verbose {
            body["stack"] = json!(diagnostic);
        }

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_with(false)
    }
}
