//! Core engine that runs rules over a document and assembles the report.

use crate::config::Config;
use crate::context::AuditContext;
use crate::dom::Document;
use crate::rule::{Rule, RuleBox};
use crate::shaper;
use crate::types::Report;

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during evaluation.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum EngineError {
    /// The document has no root element.
    #[error("Invalid document: no root element")]
    #[diagnostic(
        code(a11y_lint::invalid_document),
        help("The HTML could not be turned into a document tree; check the parser input")
    )]
    InvalidDocument,

    /// Two registered rules share an id.
    #[error("Duplicate rule id: {id}")]
    #[diagnostic(code(a11y_lint::duplicate_rule))]
    DuplicateRule {
        /// The repeated id.
        id: String,
    },
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the engine.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the engine.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if two rules share an id.
    pub fn build(self) -> Result<Engine, EngineError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.id()) {
                return Err(EngineError::DuplicateRule {
                    id: rule.id().to_string(),
                });
            }
        }

        Ok(Engine {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        })
    }
}

/// Runs a fixed, ordered list of rules against documents.
///
/// The engine holds no per-document state, so one instance can evaluate
/// documents from several threads at once.
///
/// Use [`Engine::builder()`] to construct an instance.
pub struct Engine {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the registered rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates a document and returns the shaped report.
    ///
    /// `source` identifies the document in the report and `generated_at`
    /// becomes its timestamp; the engine never reads the clock itself.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDocument`] if the document has no root.
    pub fn evaluate(
        &self,
        document: &Document,
        source: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<Report, EngineError> {
        let limits = self.config.limits;
        let ctx = AuditContext::new(document, limits).ok_or(EngineError::InvalidDocument)?;
        let mut report = Report::new(source, generated_at);

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.id()) {
                debug!("Skipping disabled rule: {}", rule.id());
                continue;
            }

            let evaluation = rule.check(&ctx);
            if !evaluation.applicable {
                debug!("Rule {} not applicable", rule.id());
                continue;
            }

            if evaluation.findings.is_empty() {
                if rule.reports_pass() {
                    report.passes.push(rule.pass());
                }
            } else if rule.surfaces_violations() {
                report.violations.push(rule.violation(evaluation.findings));
            } else {
                debug!(
                    "Rule {} produced {} finding(s), not reported",
                    rule.id(),
                    evaluation.findings.len()
                );
            }
        }

        shaper::shape(&mut report, &limits);

        info!(
            "Evaluated {}: {} violation(s), {} pass(es)",
            source,
            report.violations.len(),
            report.passes.len()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Evaluation;
    use crate::types::{Finding, Impact};
    use chrono::TimeZone;

    struct CountingRule {
        id: &'static str,
        findings: usize,
        applicable: bool,
        pass: bool,
        surfaced: bool,
    }

    impl CountingRule {
        fn new(id: &'static str, findings: usize) -> Self {
            Self {
                id,
                findings,
                applicable: true,
                pass: true,
                surfaced: true,
            }
        }
    }

    impl Rule for CountingRule {
        fn id(&self) -> &'static str {
            self.id
        }
        fn impact(&self) -> Impact {
            Impact::Serious
        }
        fn description(&self) -> &'static str {
            "counts"
        }
        fn help(&self) -> &'static str {
            "help"
        }
        fn reports_pass(&self) -> bool {
            self.pass
        }
        fn surfaces_violations(&self) -> bool {
            self.surfaced
        }
        fn check(&self, _ctx: &AuditContext<'_>) -> Evaluation {
            let findings = (0..self.findings)
                .map(|i| Finding::new("<p>", format!("p:nth-child({})", i + 1), "bad"))
                .collect();
            Evaluation {
                applicable: self.applicable,
                findings,
            }
        }
    }

    fn document() -> Document {
        let mut doc = Document::new();
        doc.create_root("html", [("lang", "en")]);
        doc
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
    }

    #[test]
    fn test_builder_rejects_duplicate_ids() {
        let result = Engine::builder()
            .rule(CountingRule::new("a", 0))
            .rule(CountingRule::new("a", 1))
            .build();
        assert!(matches!(result, Err(EngineError::DuplicateRule { id }) if id == "a"));
    }

    #[test]
    fn test_invalid_document() {
        let engine = Engine::builder().build().unwrap();
        let result = engine.evaluate(&Document::new(), "x", at());
        assert!(matches!(result, Err(EngineError::InvalidDocument)));
    }

    #[test]
    fn test_violations_passes_and_order() {
        let engine = Engine::builder()
            .rule(CountingRule::new("second", 2))
            .rule(CountingRule::new("first", 0))
            .rule(CountingRule::new("third", 1))
            .build()
            .unwrap();

        let report = engine.evaluate(&document(), "page", at()).unwrap();
        let ids: Vec<&str> = report.violations.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "third"]);
        assert_eq!(report.passes.len(), 1);
        assert_eq!(report.passes[0].id, "first");
        assert!(report.incomplete.is_empty());
        assert_eq!(report.url, "page");
        assert_eq!(report.timestamp, at());
    }

    #[test]
    fn test_not_applicable_emits_nothing() {
        let mut rule = CountingRule::new("absent", 0);
        rule.applicable = false;
        let engine = Engine::builder().rule(rule).build().unwrap();

        let report = engine.evaluate(&document(), "page", at()).unwrap();
        assert!(report.violations.is_empty());
        assert!(report.passes.is_empty());
    }

    #[test]
    fn test_unsurfaced_rule_is_dropped() {
        let mut rule = CountingRule::new("hidden", 3);
        rule.surfaced = false;
        let engine = Engine::builder().rule(rule).build().unwrap();

        let report = engine.evaluate(&document(), "page", at()).unwrap();
        assert!(report.violations.is_empty());
        assert!(report.passes.is_empty());
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let config = Config::parse("[rules.noisy]\nenabled = false\n").unwrap();
        let engine = Engine::builder()
            .rule(CountingRule::new("noisy", 4))
            .config(config)
            .build()
            .unwrap();

        let report = engine.evaluate(&document(), "page", at()).unwrap();
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_report_is_shaped() {
        let engine = Engine::builder()
            .rule(CountingRule::new("many", 12))
            .build()
            .unwrap();

        let report = engine.evaluate(&document(), "page", at()).unwrap();
        assert_eq!(report.violations[0].nodes.len(), 5);
        assert_eq!(report.violations[0].total_nodes(), 12);
    }

    #[test]
    fn test_rule_box_and_accessors() {
        let boxed: RuleBox = Box::new(CountingRule::new("boxed", 1));
        let config = Config::parse("fail_on = \"serious\"").unwrap();
        let engine = Engine::builder()
            .rule(CountingRule::new("plain", 0))
            .rule_box(boxed)
            .config(config)
            .build()
            .unwrap();

        let ids: Vec<&str> = engine.rules().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["plain", "boxed"]);
        assert_eq!(engine.rule_count(), 2);
        assert_eq!(engine.config().fail_on.as_deref(), Some("serious"));
        assert!(Engine::builder().build().unwrap().config().rules.is_empty());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
        assert_send_sync::<Document>();
    }
}
