//! Highlight post-processing for the HTML analysis.
//!
//! A pure string transform: callouts the model writes as
//! `<p><strong>Important:</strong> ...</p>` become styled `<div>` blocks, and
//! `<li><strong>Label</strong>: detail</li>` items get a detail span.

use once_cell::sync::Lazy;
use regex::Regex;

struct Callout {
    pattern: Regex,
    replacement: String,
}

static CALLOUTS: Lazy<Vec<Callout>> = Lazy::new(|| {
    [
        ("Important", "highlight"),
        ("Warning", "warning"),
        ("Recommendation", "success"),
    ]
    .into_iter()
    .map(|(label, class)| Callout {
        pattern: Regex::new(&format!(r"(?i)<p><strong>{label}:</strong>(.*?)</p>"))
            .expect("valid regex"),
        replacement: format!(r#"<div class="{class}"><strong>{label}:</strong>${{1}}</div>"#),
    })
    .collect()
});

static LABELLED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<li><strong>(.*?)</strong>:(.*?)</li>").expect("valid regex"));

/// Returns the reply with callouts and labelled list items annotated.
/// Matching is case-insensitive and never crosses a line break.
pub fn annotate_analysis(html: &str) -> String {
    let mut annotated = html.to_string();
    for callout in CALLOUTS.iter() {
        annotated = callout
            .pattern
            .replace_all(&annotated, callout.replacement.as_str())
            .into_owned();
    }
    LABELLED_ITEM
        .replace_all(
            &annotated,
            r#"<li><strong>${1}:</strong><span class="detail">${2}</span></li>"#,
        )
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_important_callout_becomes_highlight() {
        assert_eq!(
            annotate_analysis("<p><strong>Important:</strong> Add metrics.</p>"),
            r#"<div class="highlight"><strong>Important:</strong> Add metrics.</div>"#
        );
    }

    #[test]
    fn test_warning_and_recommendation_callouts() {
        let html = "<p><strong>warning:</strong> gap</p>\n<p><strong>Recommendation:</strong> apply</p>";
        let out = annotate_analysis(html);
        assert!(out.contains(r#"<div class="warning"><strong>Warning:</strong> gap</div>"#));
        assert!(out.contains(r#"<div class="success"><strong>Recommendation:</strong> apply</div>"#));
    }

    #[test]
    fn test_labelled_list_item_gets_detail_span() {
        assert_eq!(
            annotate_analysis("<li><strong>Rust</strong>: 4 years</li>"),
            r#"<li><strong>Rust:</strong><span class="detail"> 4 years</span></li>"#
        );
    }

    #[test]
    fn test_non_greedy_per_item() {
        let html = "<li><strong>A</strong>: one</li><li><strong>B</strong>: two</li>";
        let out = annotate_analysis(html);
        assert_eq!(out.matches(r#"<span class="detail">"#).count(), 2);
        assert!(out.contains(r#"<strong>B:</strong><span class="detail"> two</span>"#));
    }

    #[test]
    fn test_plain_markup_is_untouched() {
        let html = "<h2>Top Matching Skills</h2><ul><li>Rust</li></ul>";
        assert_eq!(annotate_analysis(html), html);
    }
}
