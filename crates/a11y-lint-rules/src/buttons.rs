//! Button naming rules (WCAG 4.1.2).

use a11y_lint_core::{AuditContext, Element, ElementRef, Evaluation, Impact, Rule};

use crate::text::{accessible_text, input_type, is_one_of};

/// Attributes consulted, in order, when a button has no text content.
const NAME_FALLBACKS: &[&str] = &["value", "aria-label", "title"];

/// Button labels that say nothing about the action.
const LOW_INFORMATION_PHRASES: &[&str] = &["click", "here", "more", "link", "button"];

const BUTTON_INPUT_TYPES: &[&str] = &["button", "submit", "reset"];

/// `<button>` and button-like `<input>` elements in document order.
fn buttons<'a>(ctx: &AuditContext<'a>) -> Vec<Element<'a>> {
    ctx.elements(&["button", "input"])
        .into_iter()
        .filter(|e| e.name() == "button" || BUTTON_INPUT_TYPES.contains(&input_type(*e).as_str()))
        .collect()
}

/// Buttons must have discernible text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonName;

impl ButtonName {
    /// Rule id.
    pub const ID: &'static str = "button-name";
}

impl Rule for ButtonName {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Critical
    }

    fn description(&self) -> &'static str {
        "Ensures buttons have discernible text"
    }

    fn help(&self) -> &'static str {
        "Buttons must have discernible text"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.name-role-value", "wcag2a", "wcag412"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let buttons = buttons(ctx);
        let findings = buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| accessible_text(**b, NAME_FALLBACKS).is_none())
            .map(|(i, b)| {
                ElementRef::nth(*b, i).finding(
                    "Element has no text content, and no value, aria-label or title attribute",
                )
            })
            .collect();

        Evaluation::over(buttons.len(), findings)
    }
}

/// Button text should describe the action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonTextQuality;

impl ButtonTextQuality {
    /// Rule id.
    pub const ID: &'static str = "button-text-quality";
}

impl Rule for ButtonTextQuality {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Moderate
    }

    fn description(&self) -> &'static str {
        "Ensures button text describes the action it performs"
    }

    fn help(&self) -> &'static str {
        "Button text should be descriptive"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.name-role-value", "best-practice"]
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let mut scanned = 0;
        let mut findings = Vec::new();

        for (i, button) in buttons(ctx).into_iter().enumerate() {
            let Some(text) = accessible_text(button, NAME_FALLBACKS) else {
                continue;
            };
            scanned += 1;
            if is_one_of(&text, LOW_INFORMATION_PHRASES) {
                findings.push(ElementRef::nth(button, i).finding(format!(
                    "Button text \"{text}\" does not describe the action"
                )));
            }
        }

        Evaluation::over(scanned, findings)
    }
}
