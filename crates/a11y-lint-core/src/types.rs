//! Core types for findings, rule outcomes and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How badly a rule failure affects users of assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Annoyance, content is still usable.
    Minor,
    /// Some users will have trouble.
    Moderate,
    /// Content is hard to use for some users.
    Serious,
    /// Content is unusable for some users.
    Critical,
}

impl Impact {
    /// Parses an impact name (`minor`, `moderate`, `serious`, `critical`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "minor" => Some(Self::Minor),
            "moderate" => Some(Self::Moderate),
            "serious" => Some(Self::Serious),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minor => write!(f, "minor"),
            Self::Moderate => write!(f, "moderate"),
            Self::Serious => write!(f, "serious"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// One occurrence of a rule failing on one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Markup excerpt of the offending element.
    pub html: String,
    /// Display selectors locating the element.
    pub target: Vec<String>,
    /// Explanation of what is wrong.
    #[serde(rename = "failureSummary")]
    pub failure_summary: String,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        html: impl Into<String>,
        target: impl Into<String>,
        failure_summary: impl Into<String>,
    ) -> Self {
        Self {
            html: html.into(),
            target: vec![target.into()],
            failure_summary: failure_summary.into(),
        }
    }
}

/// The outcome of a rule that produced findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Rule id (e.g., "image-alt").
    pub id: String,
    /// Fixed impact of the rule.
    pub impact: Impact,
    /// What the rule checks.
    pub description: String,
    /// Short remediation hint.
    pub help: String,
    /// Reference documentation.
    #[serde(rename = "helpUrl")]
    pub help_url: String,
    /// Classification tags (WCAG criteria, categories).
    pub tags: Vec<String>,
    /// Findings in document order.
    pub nodes: Vec<Finding>,
    #[serde(skip)]
    total_nodes: usize,
}

impl RuleResult {
    /// Creates a new rule result.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        impact: Impact,
        description: impl Into<String>,
        help: impl Into<String>,
        help_url: impl Into<String>,
        tags: &[&str],
        nodes: Vec<Finding>,
    ) -> Self {
        let total_nodes = nodes.len();
        Self {
            id: id.into(),
            impact,
            description: description.into(),
            help: help.into(),
            help_url: help_url.into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            nodes,
            total_nodes,
        }
    }

    /// Number of findings before truncation.
    ///
    /// Equals `nodes.len()` unless the report was shaped.
    #[must_use]
    pub fn total_nodes(&self) -> usize {
        self.total_nodes.max(self.nodes.len())
    }

    /// Keeps the first `max` findings, remembering the original count.
    pub fn truncate_nodes(&mut self, max: usize) {
        self.total_nodes = self.total_nodes();
        self.nodes.truncate(max);
    }
}

/// A rule that applied to the document and found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassResult {
    /// Rule id.
    pub id: String,
    /// What the rule checks.
    pub description: String,
    /// Short remediation hint.
    pub help: String,
}

impl PassResult {
    /// Creates a new pass result.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            help: help.into(),
        }
    }
}

/// Result of evaluating one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Identifier of the evaluated source (usually its URL).
    pub url: String,
    /// Rules that failed, in evaluation order.
    pub violations: Vec<RuleResult>,
    /// Rules that applied and passed, in evaluation order.
    pub passes: Vec<PassResult>,
    /// Rules that need manual review. Always empty for the built-in rules.
    pub incomplete: Vec<RuleResult>,
    /// Generation time, supplied by the caller.
    pub timestamp: DateTime<Utc>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new(url: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            violations: Vec::new(),
            passes: Vec::new(),
            incomplete: Vec::new(),
            timestamp,
        }
    }

    /// Returns true if any rule failed.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Checks if any violation meets or exceeds the given impact.
    #[must_use]
    pub fn has_violations_at(&self, impact: Impact) -> bool {
        self.violations.iter().any(|v| v.impact >= impact)
    }

    /// Looks up a violation by rule id.
    #[must_use]
    pub fn violation(&self, id: &str) -> Option<&RuleResult> {
        self.violations.iter().find(|v| v.id == id)
    }

    /// Looks up a pass by rule id.
    #[must_use]
    pub fn pass(&self, id: &str) -> Option<&PassResult> {
        self.passes.iter().find(|p| p.id == id)
    }

    /// Counts violated rules by impact as `(critical, serious, moderate, minor)`.
    #[must_use]
    pub fn count_by_impact(&self) -> (usize, usize, usize, usize) {
        let count = |impact: Impact| self.violations.iter().filter(|v| v.impact == impact).count();
        (
            count(Impact::Critical),
            count(Impact::Serious),
            count(Impact::Moderate),
            count(Impact::Minor),
        )
    }

    /// Serializes the report to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
