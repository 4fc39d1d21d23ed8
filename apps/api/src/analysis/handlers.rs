//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::analysis::intake::{
    read_submission, validate_submission, IntakeError, ACCEPTED_MEDIA_TYPE, MAX_UPLOAD_BYTES,
    MIN_JOB_DESCRIPTION_CHARS,
};
use crate::analysis::pipeline::{run_analysis, AnalysisResult};
use crate::analysis::prompts::{JOB_DESCRIPTION_CHAR_BUDGET, RESUME_CHAR_BUDGET};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

/// Intake limits, published so browser-side checks read one source of truth.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitsResponse {
    pub accepted_media_type: &'static str,
    pub max_upload_bytes: usize,
    pub min_job_description_chars: usize,
    pub resume_char_budget: usize,
    pub job_description_char_budget: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Multipart form with a `resume` PDF (≤ 5 MB) and a `jobDescription` text field.
/// Returns the HTML analysis plus the extracted match score.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    let verbose = state.config.runtime_mode.is_development();

    async move {
        info!("Analysis request received");
        match analyze(&state, multipart).await {
            Ok(analysis) => {
                info!(match_score = ?analysis.match_score, "Analysis completed successfully");
                Json(AnalyzeResponse {
                    success: true,
                    analysis,
                })
                .into_response()
            }
            Err(e) => e.into_response_with(verbose),
        }
    }
    .instrument(tracing::info_span!("analyze", %request_id))
    .await
}

async fn analyze(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AnalysisResult, AppError> {
    // A body that is not multipart at all carries no file.
    let multipart = multipart.map_err(|_| IntakeError::MissingFile)?;
    let raw = read_submission(multipart).await?;
    let request = validate_submission(raw)?;
    run_analysis(request, state.extractor.as_ref(), state.generator.as_ref()).await
}

/// GET /api/limits
pub async fn handle_limits() -> Json<LimitsResponse> {
    Json(LimitsResponse {
        accepted_media_type: ACCEPTED_MEDIA_TYPE,
        max_upload_bytes: MAX_UPLOAD_BYTES,
        min_job_description_chars: MIN_JOB_DESCRIPTION_CHARS,
        resume_char_budget: RESUME_CHAR_BUDGET,
        job_description_char_budget: JOB_DESCRIPTION_CHAR_BUDGET,
    })
}
