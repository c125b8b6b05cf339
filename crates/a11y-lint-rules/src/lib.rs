//! # a11y-lint-rules
//!
//! Built-in accessibility rules for a11y-lint.
//!
//! ## Available Rules
//!
//! | Id | Impact | Description |
//! |----|--------|-------------|
//! | `image-alt` | critical | Images must have an `alt` attribute |
//! | `label` | critical | Form fields must have a label |
//! | `placeholder-as-label` | moderate | Placeholders are not labels |
//! | `button-name` | critical | Buttons must have discernible text |
//! | `button-text-quality` | moderate | Button text should be descriptive |
//! | `link-name` | serious | Links must have discernible text |
//! | `link-text-quality` | moderate | Link text should be descriptive |
//! | `link-same-text-diff-target` | minor | Same link text, same destination |
//! | `color-contrast` | serious | Inline text colors must meet AA contrast |
//! | `document-title` | serious | Documents must have a title |
//! | `page-has-heading-one` | moderate | Page should have an `h1` |
//! | `multiple-h1` | moderate | Page should have only one `h1` |
//! | `html-has-lang` | serious | `<html>` must declare a language |
//! | `meta-viewport` | moderate | Documents should declare a viewport |
//! | `heading-order` | moderate | Heading levels increase by one |
//! | `empty-heading` | minor | Headings must not be empty |
//! | `table-headers` | serious | Tables must have `th` cells |
//! | `table-caption` | minor | Tables should have a caption (not reported) |
//!
//! ## Usage
//!
//! ```ignore
//! use a11y_lint_core::{Document, Engine};
//! use a11y_lint_rules::{ImageAlt, Preset};
//!
//! let engine = Engine::builder()
//!     .rules(Preset::Basic.rules())
//!     .build()?;
//! let report = engine.evaluate(&Document::parse_html(html), "page.html", now)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buttons;
mod color_contrast;
mod document;
mod forms;
mod headings;
mod image_alt;
mod links;
mod presets;
mod tables;
mod text;

pub use buttons::{ButtonName, ButtonTextQuality};
pub use color_contrast::ColorContrast;
pub use document::{DocumentTitle, HtmlHasLang, MetaViewport};
pub use forms::{Label, PlaceholderAsLabel};
pub use headings::{EmptyHeading, HeadingOrder, MultipleH1, PageHasHeadingOne};
pub use image_alt::ImageAlt;
pub use links::{LinkName, LinkSameTextDiffTarget, LinkTextQuality};
pub use presets::{all_rules, basic_rules, full_rules, Preset};
pub use tables::{TableCaption, TableHeaders};

/// Re-export core types for convenience.
pub use a11y_lint_core::{Impact, Rule, RuleResult};
