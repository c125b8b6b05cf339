//! Heading structure rules (WCAG 1.3.1, 2.4.6).

use a11y_lint_core::{AuditContext, Element, ElementRef, Evaluation, Impact, Rule};

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Numeric level of an `h1`..`h6` element.
fn level(heading: Element<'_>) -> u8 {
    heading
        .name()
        .strip_prefix('h')
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// The page should contain a level-one heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageHasHeadingOne;

impl PageHasHeadingOne {
    /// Rule id.
    pub const ID: &'static str = "page-has-heading-one";
}

impl Rule for PageHasHeadingOne {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Moderate
    }

    fn description(&self) -> &'static str {
        "Ensures the page, or at least one of its frames, contains a level-one heading"
    }

    fn help(&self) -> &'static str {
        "Page should contain a level-one heading"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.semantics", "best-practice"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let mut findings = Vec::new();
        if ctx.elements(&["h1"]).is_empty() {
            findings.push(
                ElementRef::singleton(ctx.root).finding("Page does not have an <h1> heading"),
            );
        }
        Evaluation::applicable(findings)
    }
}

/// The page should contain only one level-one heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleH1;

impl MultipleH1 {
    /// Rule id.
    pub const ID: &'static str = "multiple-h1";
}

impl Rule for MultipleH1 {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Moderate
    }

    fn description(&self) -> &'static str {
        "Ensures the page has a single level-one heading"
    }

    fn help(&self) -> &'static str {
        "Page should contain only one level-one heading"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.semantics", "best-practice"]
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let h1s = ctx.elements(&["h1"]);
        let findings = h1s
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, h)| ElementRef::nth(*h, i).finding("Page already has an <h1> heading"))
            .collect();

        Evaluation::over(h1s.len(), findings)
    }
}

/// Heading levels should only increase by one.
///
/// Each heading is compared with the heading immediately before it; the
/// rule does not track the full outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingOrder;

impl HeadingOrder {
    /// Rule id.
    pub const ID: &'static str = "heading-order";
}

impl Rule for HeadingOrder {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Moderate
    }

    fn description(&self) -> &'static str {
        "Ensures the order of headings is semantically correct"
    }

    fn help(&self) -> &'static str {
        "Heading levels should only increase by one"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.semantics", "best-practice"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let headings = ctx.elements(HEADING_TAGS);
        let mut findings = Vec::new();

        for (i, pair) in headings.windows(2).enumerate() {
            let (previous, current) = (level(pair[0]), level(pair[1]));
            if current > previous + 1 {
                findings.push(ElementRef::nth(pair[1], i + 1).finding(format!(
                    "Heading level jumps from h{previous} to h{current}"
                )));
            }
        }

        Evaluation::over(headings.len(), findings)
    }
}

/// Headings must not be empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyHeading;

impl EmptyHeading {
    /// Rule id.
    pub const ID: &'static str = "empty-heading";
}

impl Rule for EmptyHeading {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Minor
    }

    fn description(&self) -> &'static str {
        "Ensures headings have discernible text"
    }

    fn help(&self) -> &'static str {
        "Headings should not be empty"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.name-role-value", "best-practice"]
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let headings = ctx.elements(HEADING_TAGS);
        let findings = headings
            .iter()
            .enumerate()
            .filter(|(_, h)| h.text_content().trim().is_empty())
            .map(|(i, h)| ElementRef::nth(*h, i).finding("Heading has no text content"))
            .collect();

        Evaluation::over(headings.len(), findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::evaluate;

    #[test]
    fn test_missing_h1() {
        let eval = evaluate(&PageHasHeadingOne, "<h2>Sub</h2>");
        assert!(eval.applicable);
        assert_eq!(eval.findings.len(), 1);
        assert_eq!(eval.findings[0].target, vec!["html"]);
    }

    #[test]
    fn test_multiple_h1_flags_all_but_first() {
        let eval = evaluate(&MultipleH1, "<h1>A</h1><h1>B</h1><h1>C</h1>");
        assert_eq!(eval.findings.len(), 2);
        assert_eq!(eval.findings[0].target, vec!["h1:nth-child(2)"]);
        assert_eq!(eval.findings[1].target, vec!["h1:nth-child(3)"]);

        let single = evaluate(&MultipleH1, "<h1>A</h1>");
        assert!(single.applicable);
        assert!(single.findings.is_empty());
    }

    #[test]
    fn test_skipped_level() {
        let eval = evaluate(&HeadingOrder, "<h1>A</h1><h2>B</h2><h4>C</h4>");
        assert_eq!(eval.findings.len(), 1);
        assert_eq!(eval.findings[0].target, vec!["h4:nth-child(3)"]);
        assert!(eval.findings[0].failure_summary.contains("h2 to h4"));
    }

    #[test]
    fn test_sequential_and_decreasing_levels_pass() {
        let eval = evaluate(&HeadingOrder, "<h1>A</h1><h2>B</h2><h3>C</h3><h2>D</h2><h1>E</h1>");
        assert!(eval.applicable);
        assert!(eval.findings.is_empty());
    }

    #[test]
    fn test_only_consecutive_pairs_compared() {
        // h3 -> h2 is fine, h2 -> h4 jumps again.
        let eval = evaluate(&HeadingOrder, "<h1>A</h1><h3>B</h3><h2>C</h2><h4>D</h4>");
        assert_eq!(eval.findings.len(), 2);
        assert_eq!(eval.findings[0].target, vec!["h3:nth-child(2)"]);
        assert_eq!(eval.findings[1].target, vec!["h4:nth-child(4)"]);
    }

    #[test]
    fn test_empty_heading() {
        let eval = evaluate(&EmptyHeading, "<h1>Title</h1><h2> </h2><h3><img src=x></h3>");
        assert_eq!(eval.findings.len(), 2);
        assert_eq!(eval.findings[0].target, vec!["h2:nth-child(2)"]);
    }

    #[test]
    fn test_no_headings_not_applicable() {
        assert!(!evaluate(&HeadingOrder, "<p>x</p>").applicable);
        assert!(!evaluate(&EmptyHeading, "<p>x</p>").applicable);
        assert!(!evaluate(&MultipleH1, "<p>x</p>").applicable);
    }
}
