// Prompt template and composition for the résumé analysis call.

pub const RESUME_CHAR_BUDGET: usize = 10_000;
pub const JOB_DESCRIPTION_CHAR_BUDGET: usize = 5_000;

/// Appended after each input whether or not it was actually cut.
pub const TRUNCATION_MARKER: &str = "[truncated if too long]";

/// Replace `{resume_text}` and `{job_description}` before sending.
/// Section 1 must keep the `Match Percentage: NN%` shape; score extraction relies on it.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this resume against the provided job description:

Resume:
{resume_text}

Job Description:
{job_description}

Provide a detailed analysis with:
1. Match Percentage (0-100%)
2. Top Matching Skills
3. Missing Qualifications
4. Improvement Suggestions
5. Final Recommendation

Format the response in HTML with proper headings and lists.
Use one heading per section, in the order above.
Write the first section as a single line of the form "Match Percentage: NN%".
Do not wrap the response in markdown code fences."#;

/// Hard prefix cut on Unicode scalar values; never splits a code point.
pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds the analysis prompt. Pure: identical inputs always give identical output.
pub fn compose_prompt(resume_text: &str, job_description: &str) -> String {
    let resume = format!(
        "{} {TRUNCATION_MARKER}",
        truncate_chars(resume_text, RESUME_CHAR_BUDGET)
    );
    let job = format!(
        "{} {TRUNCATION_MARKER}",
        truncate_chars(job_description, JOB_DESCRIPTION_CHAR_BUDGET)
    );
    // Job description first: a résumé containing the literal placeholder must not be re-substituted.
    ANALYSIS_PROMPT_TEMPLATE
        .replacen("{job_description}", &job, 1)
        .replacen("{resume_text}", &resume, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [&str; 5] = [
        "1. Match Percentage (0-100%)",
        "2. Top Matching Skills",
        "3. Missing Qualifications",
        "4. Improvement Suggestions",
        "5. Final Recommendation",
    ];

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose_prompt("Rust, Tokio, Axum", "Backend engineer");
        let b = compose_prompt("Rust, Tokio, Axum", "Backend engineer");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sections_appear_once_in_order() {
        let prompt = compose_prompt("resume", "job");
        let mut last = 0;
        for section in SECTIONS {
            let idx = prompt.find(section).unwrap_or_else(|| panic!("missing {section}"));
            assert!(idx > last || last == 0, "{section} out of order");
            assert_eq!(prompt.matches(section).count(), 1);
            last = idx;
        }
        assert!(prompt.contains("HTML with proper headings and lists"));
    }

    #[test]
    fn test_resume_over_budget_is_cut_to_exact_prefix() {
        let resume = format!("{}{}", "a".repeat(RESUME_CHAR_BUDGET), "Z");
        let prompt = compose_prompt(&resume, "job");
        let kept = format!("{} {TRUNCATION_MARKER}", "a".repeat(RESUME_CHAR_BUDGET));
        assert!(prompt.contains(&kept));
        assert!(!prompt.contains('Z'));
    }

    #[test]
    fn test_marker_present_at_exact_budget() {
        let resume = "b".repeat(RESUME_CHAR_BUDGET);
        let prompt = compose_prompt(&resume, "job");
        assert!(prompt.contains(&format!("{resume} {TRUNCATION_MARKER}")));
    }

    #[test]
    fn test_marker_present_for_short_inputs() {
        let prompt = compose_prompt("short resume", "short job");
        assert!(prompt.contains(&format!("short resume {TRUNCATION_MARKER}")));
        assert!(prompt.contains(&format!("short job {TRUNCATION_MARKER}")));
        assert_eq!(prompt.matches(TRUNCATION_MARKER).count(), 2);
    }

    #[test]
    fn test_job_description_budget() {
        let job = format!("{}{}", "j".repeat(JOB_DESCRIPTION_CHAR_BUDGET), "TAIL");
        let prompt = compose_prompt("resume", &job);
        assert!(prompt.contains(&format!(
            "{} {TRUNCATION_MARKER}",
            "j".repeat(JOB_DESCRIPTION_CHAR_BUDGET)
        )));
        assert!(!prompt.contains("TAIL"));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(12);
        let cut = truncate_chars(&text, 10);
        assert_eq!(cut.chars().count(), 10);
        assert_eq!(cut.len(), 20);
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_placeholders_in_inputs_are_not_substituted() {
        let prompt = compose_prompt("my resume says {job_description}", "job text");
        assert!(prompt.contains("my resume says {job_description}"));
        assert_eq!(prompt.matches("job text").count(), 1);
    }
}
