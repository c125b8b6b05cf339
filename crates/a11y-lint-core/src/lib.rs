//! # a11y-lint-core
//!
//! Core framework for accessibility linting of rendered HTML.
//!
//! This crate provides the foundational types for building accessibility
//! checkers. It includes:
//!
//! - [`Document`] and [`Element`], the read-only tree rules query
//! - [`Rule`] trait for document-wide accessibility rules
//! - [`Engine`] for running rules and assembling a [`Report`]
//! - [`color`] for WCAG contrast math
//! - [`ElementRef`] for locating findings
//!
//! ## Example
//!
//! ```ignore
//! use a11y_lint_core::{Document, Engine};
//!
//! let engine = Engine::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let document = Document::parse_html(html);
//! let report = engine.evaluate(&document, "https://example.com", chrono::Utc::now())?;
//! println!("{}", report.to_json()?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod locator;
mod rule;
mod types;

/// Color parsing and contrast math.
pub mod color;
/// The document tree consumed by rules.
pub mod dom;
/// Result truncation.
pub mod shaper;

pub use color::{contrast_ratio, parse_color, Rgb};
pub use config::{Config, ConfigError, RuleConfig};
pub use context::AuditContext;
pub use dom::{Document, Element, NodeId};
pub use engine::{Engine, EngineBuilder, EngineError};
pub use locator::{ElementRef, LARGE_ELEMENT_EXCERPT};
pub use rule::{Evaluation, Rule, RuleBox, HELP_URL_BASE};
pub use shaper::ResultLimits;
pub use types::{Finding, Impact, PassResult, Report, RuleResult};
