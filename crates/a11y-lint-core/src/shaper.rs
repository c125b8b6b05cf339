//! Result limits applied before a report leaves the engine.

use crate::types::Report;
use serde::{Deserialize, Serialize};

/// Default cap on findings per rule result in the final report.
pub const DEFAULT_MAX_NODES_PER_RULE: usize = 5;

/// Default cap on findings collected by the color-contrast rule.
pub const DEFAULT_MAX_CONTRAST_FINDINGS: usize = 10;

/// Truncation caps. Both truncate, neither reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLimits {
    /// Findings kept per rule result in the final report.
    #[serde(default = "default_max_nodes_per_rule")]
    pub max_nodes_per_rule: usize,

    /// Findings the color-contrast rule collects before stopping.
    #[serde(default = "default_max_contrast_findings")]
    pub max_contrast_findings: usize,
}

impl Default for ResultLimits {
    fn default() -> Self {
        Self {
            max_nodes_per_rule: DEFAULT_MAX_NODES_PER_RULE,
            max_contrast_findings: DEFAULT_MAX_CONTRAST_FINDINGS,
        }
    }
}

fn default_max_nodes_per_rule() -> usize {
    DEFAULT_MAX_NODES_PER_RULE
}

fn default_max_contrast_findings() -> usize {
    DEFAULT_MAX_CONTRAST_FINDINGS
}

/// Caps the findings of every violation and incomplete result.
///
/// At least one finding is always kept.
pub fn shape(report: &mut Report, limits: &ResultLimits) {
    let max = limits.max_nodes_per_rule.max(1);
    for result in report
        .violations
        .iter_mut()
        .chain(report.incomplete.iter_mut())
    {
        result.truncate_nodes(max);
    }
}
