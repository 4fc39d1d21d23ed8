//! Analysis pipeline — orchestrates a single résumé analysis.
//!
//! Flow: extract text → compose prompt → one LLM call → strip fences →
//!       extract score and sections → annotate.
//!
//! Nothing is persisted and nothing is shared between requests. The upload
//! bytes are moved into the extractor and released when extraction returns.

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::extract::DocumentExtractor;
use crate::analysis::intake::AnalysisRequest;
use crate::analysis::markup::annotate_analysis;
use crate::analysis::prompts::compose_prompt;
use crate::analysis::response::{
    extract_match_score, extract_sections, strip_code_fences, AnalysisSections,
};
use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};

/// Outcome of one analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// HTML analysis as returned by the model, minus any code fences.
    pub result: String,
    /// `None` when the reply carries no usable `Match Percentage` line.
    pub match_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<AnalysisSections>,
    pub annotated_result: String,
}

/// Runs the pipeline to completion or to the first failure.
pub async fn run_analysis(
    request: AnalysisRequest,
    extractor: &dyn DocumentExtractor,
    generator: &dyn TextGenerator,
) -> Result<AnalysisResult, AppError> {
    let AnalysisRequest {
        document,
        job_description,
    } = request;

    if !job_description.is_detailed_enough() {
        warn!("Job description is very short; analysis quality may suffer");
    }

    info!(file_name = ?document.file_name, "Extracting text from PDF...");
    let resume_text = extractor
        .extract(document.content)
        .await
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    let prompt = compose_prompt(&resume_text, job_description.as_str());

    info!("Sending request to the LLM...");
    let reply = generator.generate(&prompt).await.map_err(|e| match e {
        LlmError::Api { message, .. } => AppError::Llm(message),
        other => AppError::Llm(other.to_string()),
    })?;

    let result = strip_code_fences(&reply).to_string();
    if result.is_empty() {
        return Err(AppError::Llm(LlmError::EmptyContent.to_string()));
    }

    let match_score = extract_match_score(&result);
    if match_score.is_none() {
        warn!("No match percentage found in LLM reply");
    }

    Ok(AnalysisResult {
        match_score,
        sections: extract_sections(&result),
        annotated_result: annotate_analysis(&result),
        result,
    })
}
