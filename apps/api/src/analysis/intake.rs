//! Intake — validates the multipart submission before any extraction or LLM work.
//!
//! `read_submission` drains the form into a `RawSubmission`; `validate_submission`
//! is the pure accept/reject decision over it.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::{Bytes, BytesMut};
use thiserror::Error;

use crate::errors::AppError;

pub const ACCEPTED_MEDIA_TYPE: &str = "application/pdf";
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
/// Advisory only: shorter descriptions are accepted but rarely produce a useful analysis.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;
/// Room for the job description and multipart framing on top of the file itself.
pub const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("No resume file uploaded")]
    MissingFile,

    #[error("Only PDF files are allowed")]
    UnsupportedMediaType,

    #[error("File size exceeds 5MB limit")]
    FileTooLarge,

    #[error("Job description is required")]
    MissingJobDescription,

    #[error("Malformed form submission: {0}")]
    MalformedForm(String),
}

impl From<IntakeError> for AppError {
    fn from(e: IntakeError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// The file part of a submission, as received.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub file_name: Option<String>,
    pub media_type: Option<String>,
    /// Bytes observed on the wire. Reading stops once the ceiling is passed,
    /// so for oversized uploads this is a lower bound. Zero when the media type
    /// was rejected before any content was read.
    pub size: usize,
    pub content: Bytes,
}

/// Form fields as received, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    pub file: Option<CandidateFile>,
    pub job_description: Option<String>,
}

/// A résumé upload that passed intake.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub content: Bytes,
}

/// Non-blank job description text, kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescription(String);

impl JobDescription {
    pub fn parse(text: String) -> Result<Self, IntakeError> {
        if text.trim().is_empty() {
            return Err(IntakeError::MissingJobDescription);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_detailed_enough(&self) -> bool {
        self.0.trim().chars().count() >= MIN_JOB_DESCRIPTION_CHARS
    }
}

/// A submission that passed every intake check.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub document: UploadedDocument,
    pub job_description: JobDescription,
}

/// `application/pdf; charset=binary` and `Application/PDF` both count as the accepted type.
fn is_accepted_media_type(media_type: &str) -> bool {
    media_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(ACCEPTED_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Accepts or rejects a submission. Checks run in a fixed order:
/// file present, media type, size, job description.
pub fn validate_submission(raw: RawSubmission) -> Result<AnalysisRequest, IntakeError> {
    let file = raw.file.ok_or(IntakeError::MissingFile)?;

    if !file.media_type.as_deref().is_some_and(is_accepted_media_type) {
        return Err(IntakeError::UnsupportedMediaType);
    }
    if file.size > MAX_UPLOAD_BYTES {
        return Err(IntakeError::FileTooLarge);
    }

    let job_description = raw
        .job_description
        .ok_or(IntakeError::MissingJobDescription)
        .and_then(JobDescription::parse)?;

    Ok(AnalysisRequest {
        document: UploadedDocument {
            file_name: file.file_name,
            content: file.content,
        },
        job_description,
    })
}

fn map_multipart_error(e: MultipartError) -> IntakeError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        IntakeError::FileTooLarge
    } else {
        IntakeError::MalformedForm(e.body_text())
    }
}

/// Drains the multipart form. Unknown fields are skipped.
///
/// The résumé is read chunk by chunk. Draining stops early, leaving the rest of
/// the body unread, once the résumé has a rejected media type or passes
/// `MAX_UPLOAD_BYTES`; `validate_submission` then reports that file error first.
pub async fn read_submission(mut multipart: Multipart) -> Result<RawSubmission, IntakeError> {
    let mut submission = RawSubmission::default();

    while let Some(mut field) = multipart.next_field().await.map_err(map_multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            RESUME_FIELD => {
                let file_name = field.file_name().map(str::to_string);
                let media_type = field.content_type().map(str::to_string);

                if !media_type.as_deref().is_some_and(is_accepted_media_type) {
                    submission.file = Some(CandidateFile {
                        file_name,
                        media_type,
                        size: 0,
                        content: Bytes::new(),
                    });
                    return Ok(submission);
                }

                let mut content = BytesMut::new();
                let mut size = 0usize;
                while let Some(chunk) = field.chunk().await.map_err(map_multipart_error)? {
                    size += chunk.len();
                    if size > MAX_UPLOAD_BYTES {
                        break;
                    }
                    content.extend_from_slice(&chunk);
                }
                let oversized = size > MAX_UPLOAD_BYTES;
                submission.file = Some(CandidateFile {
                    file_name,
                    media_type,
                    size,
                    content: content.freeze(),
                });
                if oversized {
                    return Ok(submission);
                }
            }
            JOB_DESCRIPTION_FIELD => {
                submission.job_description =
                    Some(field.text().await.map_err(map_multipart_error)?);
            }
            _ => {}
        }
    }

    Ok(submission)
}
