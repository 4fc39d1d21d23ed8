//! Text extraction from uploaded résumés.
//!
//! `pdf_extract` is synchronous and CPU-bound, so parsing runs inside
//! `tokio::task::spawn_blocking`. A panic inside the parser surfaces as a
//! `JoinError` and is reported like any other parse failure.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("{0}")]
    Parse(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Turns an accepted document into plain text. Layout is not preserved.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, content: Bytes) -> Result<String, ExtractionError>;
}

/// Default extractor backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

#[async_trait]
impl DocumentExtractor for PdfTextExtractor {
    async fn extract(&self, content: Bytes) -> Result<String, ExtractionError> {
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&content)
                .map_err(|e| ExtractionError::Parse(e.to_string()))
        })
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))?
    }
}
