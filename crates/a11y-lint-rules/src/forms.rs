//! Form field labeling rules (WCAG 1.3.1, 4.1.2).
//!
//! A field counts as labeled when a `<label for>` points at its `id`, or it
//! carries `aria-label` or `aria-labelledby`. `aria-labelledby` is checked
//! for presence only; the referenced element is not resolved.

use a11y_lint_core::{AuditContext, Element, ElementRef, Evaluation, Impact, Rule};
use std::collections::HashSet;

use crate::text::input_type;

/// Input types that do not take a label.
const UNLABELED_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "reset", "image"];

/// Form-entry elements in document order.
fn form_fields<'a>(ctx: &AuditContext<'a>) -> Vec<Element<'a>> {
    ctx.elements(&["input", "textarea", "select"])
        .into_iter()
        .filter(|e| e.name() != "input" || !UNLABELED_INPUT_TYPES.contains(&input_type(*e).as_str()))
        .collect()
}

/// Ids referenced by `<label for>` elements.
fn label_targets<'a>(ctx: &AuditContext<'a>) -> HashSet<&'a str> {
    ctx.elements(&["label"])
        .iter()
        .filter_map(|l| l.attr("for"))
        .collect()
}

fn is_labeled(field: Element<'_>, targets: &HashSet<&str>) -> bool {
    let by_for = field
        .attr("id")
        .is_some_and(|id| !id.is_empty() && targets.contains(id));
    by_for || field.has_attr("aria-label") || field.has_attr("aria-labelledby")
}

/// Form elements must have labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Label;

impl Label {
    /// Rule id.
    pub const ID: &'static str = "label";
}

impl Rule for Label {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Critical
    }

    fn description(&self) -> &'static str {
        "Ensures every form element has a label"
    }

    fn help(&self) -> &'static str {
        "Form elements must have labels"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.forms", "wcag2a", "wcag131", "wcag412"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let fields = form_fields(ctx);
        let targets = label_targets(ctx);

        let findings = fields
            .iter()
            .enumerate()
            .filter(|(_, f)| !is_labeled(**f, &targets))
            .map(|(i, f)| {
                ElementRef::nth(*f, i).finding(
                    "Form element has no <label for> pointing at its id, no aria-label and no \
                     aria-labelledby attribute",
                )
            })
            .collect();

        Evaluation::over(fields.len(), findings)
    }
}

/// Placeholder text must not stand in for a label.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAsLabel;

impl PlaceholderAsLabel {
    /// Rule id.
    pub const ID: &'static str = "placeholder-as-label";
}

impl Rule for PlaceholderAsLabel {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Moderate
    }

    fn description(&self) -> &'static str {
        "Ensures placeholder text is not the only label of a form element"
    }

    fn help(&self) -> &'static str {
        "Placeholder text disappears on input and is not a substitute for a label"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.forms", "best-practice"]
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let fields = form_fields(ctx);
        let targets = label_targets(ctx);
        let mut scanned = 0;
        let mut findings = Vec::new();

        for (i, field) in fields.iter().enumerate() {
            let Some(placeholder) = field.attr("placeholder") else {
                continue;
            };
            scanned += 1;
            if !is_labeled(*field, &targets) {
                findings.push(ElementRef::nth(*field, i).finding(format!(
                    "Form element relies on its placeholder \"{placeholder}\" as its only label"
                )));
            }
        }

        Evaluation::over(scanned, findings)
    }
}
