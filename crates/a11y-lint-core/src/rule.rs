//! Rule trait for defining accessibility checks.

use crate::context::AuditContext;
use crate::types::{Finding, Impact, PassResult, RuleResult};

/// Base URL of the rule reference documentation.
pub const HELP_URL_BASE: &str = "https://dequeuniversity.com/rules/axe/4.8/";

/// What a rule observed on one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether any element the rule cares about exists.
    pub applicable: bool,
    /// Findings in document order.
    pub findings: Vec<Finding>,
}

impl Evaluation {
    /// The rule found nothing to check; it yields neither a pass nor a violation.
    #[must_use]
    pub fn not_applicable() -> Self {
        Self::default()
    }

    /// The rule checked at least one element.
    #[must_use]
    pub fn applicable(findings: Vec<Finding>) -> Self {
        Self {
            applicable: true,
            findings,
        }
    }

    /// Applicable when `scanned` is non-zero.
    #[must_use]
    pub fn over(scanned: usize, findings: Vec<Finding>) -> Self {
        Self {
            applicable: scanned > 0,
            findings,
        }
    }
}

/// An accessibility rule evaluated against a whole document.
///
/// Impact, description, help text and tags are fixed per rule; they never
/// depend on the document.
///
/// # Example
///
/// ```ignore
/// use a11y_lint_core::{AuditContext, ElementRef, Evaluation, Impact, Rule};
///
/// pub struct NoMarquee;
///
/// impl Rule for NoMarquee {
///     fn id(&self) -> &'static str { "marquee" }
///     fn impact(&self) -> Impact { Impact::Serious }
///     fn description(&self) -> &'static str { "Ensures <marquee> elements are not used" }
///     fn help(&self) -> &'static str { "<marquee> elements are deprecated" }
///     fn tags(&self) -> &'static [&'static str] { &["wcag2a", "wcag222"] }
///
///     fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
///         let marquees = ctx.elements(&["marquee"]);
///         let findings = marquees
///             .iter()
///             .enumerate()
///             .map(|(i, m)| ElementRef::nth(*m, i).finding("Remove the marquee"))
///             .collect();
///         Evaluation::over(marquees.len(), findings)
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case id of this rule (e.g., "image-alt").
    fn id(&self) -> &'static str;

    /// Returns the impact of violations from this rule.
    fn impact(&self) -> Impact;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str;

    /// Returns a short remediation hint.
    fn help(&self) -> &'static str;

    /// Returns the reference documentation URL.
    fn help_url(&self) -> String {
        format!("{HELP_URL_BASE}{}", self.id())
    }

    /// Returns the classification tags.
    fn tags(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether an applicable rule with no findings is reported as a pass.
    fn reports_pass(&self) -> bool {
        false
    }

    /// Whether findings are reported as violations.
    ///
    /// Rules returning `false` are still evaluated, their findings are only
    /// logged.
    fn surfaces_violations(&self) -> bool {
        true
    }

    /// Evaluates the document.
    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation;

    /// Builds the violation entry for this rule.
    fn violation(&self, findings: Vec<Finding>) -> RuleResult {
        RuleResult::new(
            self.id(),
            self.impact(),
            self.description(),
            self.help(),
            self.help_url(),
            self.tags(),
            findings,
        )
    }

    /// Builds the pass entry for this rule.
    fn pass(&self) -> PassResult {
        PassResult::new(self.id(), self.description(), self.help())
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn id(&self) -> &'static str {
            "test-rule"
        }
        fn impact(&self) -> Impact {
            Impact::Minor
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn help(&self) -> &'static str {
            "Fix it"
        }

        fn check(&self, _ctx: &AuditContext<'_>) -> Evaluation {
            Evaluation::applicable(vec![Finding::new("<p>", "p:nth-child(1)", "bad")])
        }
    }

    #[test]
    fn test_rule_defaults() {
        let rule = TestRule;
        assert_eq!(rule.help_url(), format!("{HELP_URL_BASE}test-rule"));
        assert!(rule.tags().is_empty());
        assert!(!rule.reports_pass());
        assert!(rule.surfaces_violations());
    }

    #[test]
    fn violation_carries_rule_metadata() {
        let result = TestRule.violation(vec![Finding::new("<p>", "p", "bad")]);
        assert_eq!(result.id, "test-rule");
        assert_eq!(result.impact, Impact::Minor);
        assert_eq!(result.help, "Fix it");
        assert_eq!(result.nodes.len(), 1);

        let pass = TestRule.pass();
        assert_eq!(pass.description, "A test rule");
    }

    #[test]
    fn evaluation_over_tracks_applicability() {
        assert!(!Evaluation::over(0, Vec::new()).applicable);
        assert!(Evaluation::over(2, Vec::new()).applicable);
        assert!(!Evaluation::not_applicable().applicable);
    }
}
