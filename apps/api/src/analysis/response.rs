//! Response parsing — pulls structured fields out of the model's free-form HTML reply.
//!
//! Everything here is best-effort. A missing score or section is a valid result,
//! never an error, and never blocks delivery of the raw reply.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static MATCH_SCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Match Percentage:\s*(\d+)\s*%").expect("valid regex"));

/// Opening tag of any HTML heading.
static HEADING_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h[1-6][\s>]").expect("valid regex"));

/// Returns the first `Match Percentage: NN%` value in the reply.
/// `None` when the phrase is absent or the number is outside 0–100.
pub fn extract_match_score(reply: &str) -> Option<u8> {
    MATCH_SCORE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .filter(|score| *score <= 100)
}

/// Per-section slices of the reply for clients that render them separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
}

const STRENGTHS_HEADING: &str = "top matching skills";
const WEAKNESSES_HEADING: &str = "missing qualifications";
const RECOMMENDATIONS_HEADING: &str = "improvement suggestions";

/// Body of the section whose heading contains `title`: everything after the
/// heading's closing tag up to the next heading, trimmed.
fn section_body(reply: &str, title: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `reply`.
    let lower = reply.to_ascii_lowercase();
    let title_at = lower.find(title)?;

    let after_title = title_at + title.len();
    let line_end = lower[after_title..]
        .find('\n')
        .map(|i| after_title + i)
        .unwrap_or(lower.len());
    // Only a closing tag on the title's own line ends the heading; otherwise
    // (plain-text reply) the body starts on the next line.
    let body_start = match lower[after_title..line_end].find("</h") {
        Some(close) => {
            let close_at = after_title + close;
            lower[close_at..line_end]
                .find('>')
                .map(|i| close_at + i + 1)
                .unwrap_or(line_end)
        }
        None => line_end,
    };

    let body_end = HEADING_OPEN
        .find(&reply[body_start..])
        .map(|m| body_start + m.start())
        .unwrap_or(reply.len());

    let body = reply[body_start..body_end].trim();
    (!body.is_empty()).then(|| body.to_string())
}

/// Splits the reply into the sections a browser client shows in separate cards.
/// `None` when no known heading is found.
pub fn extract_sections(reply: &str) -> Option<AnalysisSections> {
    let sections = AnalysisSections {
        strengths: section_body(reply, STRENGTHS_HEADING),
        weaknesses: section_body(reply, WEAKNESSES_HEADING),
        recommendations: section_body(reply, RECOMMENDATIONS_HEADING),
    };
    (sections != AnalysisSections::default()).then_some(sections)
}

/// Info strings such as `html` or `HTML5` on an opening fence.
static FENCE_INFO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)html?5?").expect("valid regex"));

/// Strips a ```html ... ``` (or bare ```) wrapper the model sometimes adds.
/// Anything after the closing fence is dropped.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = match rest.find('\n') {
        Some(newline)
            if rest[..newline]
                .trim()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_')) =>
        {
            &rest[newline + 1..]
        }
        // One-line fence: the info string runs straight into the markup.
        _ => FENCE_INFO
            .find(rest)
            .map(|m| &rest[m.end()..])
            .unwrap_or(rest),
    };
    match rest.rfind("```") {
        Some(close) => rest[..close].trim(),
        None => rest.trim(),
    }
}
