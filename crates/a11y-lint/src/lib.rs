//! # a11y-lint
//!
//! WCAG-modeled accessibility checks for HTML documents.
//!
//! This is the main facade crate that re-exports the engine, the document
//! model and the built-in rules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let report = a11y_lint::audit_html(html, "https://example.com/")?;
//! for violation in &report.violations {
//!     println!("{} ({}): {}", violation.id, violation.impact, violation.help);
//! }
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use a11y_lint::{Config, Document, Engine};
//! use a11y_lint::rules::Preset;
//!
//! let engine = Engine::builder()
//!     .config(Config::parse(&toml)?)
//!     .rules(Preset::Basic.rules())
//!     .build()?;
//!
//! let report = engine.evaluate(&Document::parse_html(html), "page.html", timestamp)?;
//! ```

#![forbid(unsafe_code)]

use chrono::Utc;

// Re-export core types and traits
pub use a11y_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use a11y_lint_rules::*;
}

/// Audits an already-built document with every built-in rule.
///
/// Uses the default configuration and stamps the report with the current
/// time.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDocument`] if the document has no root
/// element.
pub fn audit_document(document: &Document, url: &str) -> Result<Report, EngineError> {
    let engine = Engine::builder().rules(rules::full_rules()).build()?;
    engine.evaluate(document, url, Utc::now())
}

/// Parses `html` and audits it with every built-in rule.
///
/// # Errors
///
/// Returns an error only if the engine cannot be assembled; HTML parsing
/// always produces a document.
pub fn audit_html(html: &str, url: &str) -> Result<Report, EngineError> {
    audit_document(&Document::parse_html(html), url)
}
