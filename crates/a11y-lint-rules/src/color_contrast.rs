//! Text color contrast rule (WCAG 1.4.3).
//!
//! Only inline `style` declarations on the element itself are considered:
//! both `color` and `background-color` must be declared, and font size and
//! weight are read from the same declaration block. Colors that cannot be
//! parsed are skipped.

use a11y_lint_core::color::{contrast_ratio, parse_color, required_ratio};
use a11y_lint_core::{AuditContext, Element, ElementRef, Evaluation, Impact, Rule};
use tracing::debug;

const TEXT_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "div", "a", "button", "label", "li",
];

/// Parsed inline `style` attribute. Later declarations win.
struct InlineStyle<'a> {
    declarations: Vec<(String, &'a str)>,
}

impl<'a> InlineStyle<'a> {
    fn of(element: Element<'a>) -> Self {
        let declarations = element
            .attr("style")
            .unwrap_or_default()
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(prop, value)| {
                let value = value.trim();
                let value = value.strip_suffix("!important").map_or(value, str::trim_end);
                (prop.trim().to_ascii_lowercase(), value)
            })
            .collect();
        Self { declarations }
    }

    fn get(&self, property: &str) -> Option<&'a str> {
        self.declarations
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| *v)
    }

    fn font_size_px(&self) -> Option<f64> {
        self.get("font-size")?
            .strip_suffix("px")?
            .trim()
            .parse()
            .ok()
    }

    fn is_bold(&self) -> bool {
        match self.get("font-weight") {
            Some(weight) => {
                let weight = weight.to_ascii_lowercase();
                weight == "bold"
                    || weight == "bolder"
                    || weight.parse::<u16>().is_ok_and(|w| w >= 700)
            }
            None => false,
        }
    }
}

/// Text must have sufficient contrast against its background.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorContrast;

impl ColorContrast {
    /// Rule id.
    pub const ID: &'static str = "color-contrast";
}

impl Rule for ColorContrast {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Serious
    }

    fn description(&self) -> &'static str {
        "Ensures the contrast between foreground and background colors meets WCAG 2 AA thresholds"
    }

    fn help(&self) -> &'static str {
        "Elements must have sufficient color contrast"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.color", "wcag2aa", "wcag143"]
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let candidates: Vec<(Element<'_>, InlineStyle<'_>)> = ctx
            .elements(TEXT_TAGS)
            .into_iter()
            .filter(|e| !e.text_content().trim().is_empty())
            .map(|e| (e, InlineStyle::of(e)))
            .filter(|(_, style)| style.get("color").is_some() && style.get("background-color").is_some())
            .collect();

        let mut findings = Vec::new();
        for (i, (element, style)) in candidates.iter().enumerate() {
            if findings.len() >= ctx.limits.max_contrast_findings {
                break;
            }
            let (Some(fg_raw), Some(bg_raw)) = (style.get("color"), style.get("background-color"))
            else {
                continue;
            };
            let (Some(fg), Some(bg)) = (parse_color(fg_raw), parse_color(bg_raw)) else {
                debug!(fg = fg_raw, bg = bg_raw, "skipping unparsable colors");
                continue;
            };

            let font_size = style.font_size_px();
            let bold = style.is_bold();
            let required = required_ratio(font_size, bold);
            let ratio = contrast_ratio(fg, bg);
            if ratio >= required {
                continue;
            }

            let size_text = font_size.map_or_else(|| "unspecified".to_string(), |s| format!("{s}px"));
            let weight_text = if bold { "bold" } else { "normal" };
            findings.push(ElementRef::nth(*element, i).finding(format!(
                "Element has insufficient color contrast of {ratio:.2} (foreground color: {fg}, \
                 background color: {bg}, font size: {size_text}, font weight: {weight_text}). \
                 Expected contrast ratio of {required}:1"
            )));
        }

        Evaluation::over(candidates.len(), findings)
    }
}
