//! Rule requiring an `alt` attribute on every `<img>` (WCAG 1.1.1).
//!
//! An empty `alt=""` marks the image as decorative and is accepted; only a
//! missing attribute is a violation.

use a11y_lint_core::{AuditContext, ElementRef, Evaluation, Impact, Rule};

/// Images must have alternate text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageAlt;

impl ImageAlt {
    /// Rule id.
    pub const ID: &'static str = "image-alt";
}

impl Rule for ImageAlt {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Critical
    }

    fn description(&self) -> &'static str {
        "Ensures <img> elements have alternate text or a role of none or presentation"
    }

    fn help(&self) -> &'static str {
        "Images must have alternate text"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.text-alternatives", "wcag2a", "wcag111"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let images = ctx.elements(&["img"]);
        let findings = images
            .iter()
            .enumerate()
            .filter(|(_, img)| !img.has_attr("alt"))
            .map(|(i, img)| {
                ElementRef::nth(*img, i).finding(
                    "Element does not have an alt attribute. Add alt text describing the image, \
                     or alt=\"\" if it is decorative",
                )
            })
            .collect();

        Evaluation::over(images.len(), findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::evaluate;

    #[test]
    fn test_detects_missing_alt() {
        let eval = evaluate(&ImageAlt, r#"<img src="a.png"><img src="b.png" alt="B">"#);
        assert!(eval.applicable);
        assert_eq!(eval.findings.len(), 1);
        assert_eq!(eval.findings[0].target, vec!["img:nth-child(1)"]);
        assert_eq!(eval.findings[0].html, r#"<img src="a.png">"#);
    }

    #[test]
    fn test_empty_alt_is_decorative() {
        let eval = evaluate(&ImageAlt, r#"<img src="x" alt="">"#);
        assert!(eval.applicable);
        assert!(eval.findings.is_empty());
    }

    #[test]
    fn test_ordinal_counts_images_only() {
        let eval = evaluate(
            &ImageAlt,
            r#"<div><img src="1" alt="one"></div><p>text</p><img src="2">"#,
        );
        assert_eq!(eval.findings[0].target, vec!["img:nth-child(2)"]);
    }

    #[test]
    fn test_no_images_not_applicable() {
        let eval = evaluate(&ImageAlt, "<p>no pictures</p>");
        assert!(!eval.applicable);
    }
}
