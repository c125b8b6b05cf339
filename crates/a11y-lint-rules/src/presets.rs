//! Rule presets.

use std::fmt;
use std::str::FromStr;

use crate::{
    ButtonName, ButtonTextQuality, ColorContrast, DocumentTitle, EmptyHeading, HeadingOrder,
    HtmlHasLang, ImageAlt, Label, LinkName, LinkSameTextDiffTarget, LinkTextQuality, MetaViewport,
    MultipleH1, PageHasHeadingOne, PlaceholderAsLabel, TableCaption, TableHeaders,
};
use a11y_lint_core::RuleBox;

/// Named rule subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Every built-in rule.
    #[default]
    Full,
    /// Core WCAG A/AA checks only.
    Basic,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Self; 2] = [Self::Full, Self::Basic];

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Full => full_rules(),
            Self::Basic => basic_rules(),
        }
    }

    /// Preset name as used in configuration and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Basic => "basic",
        }
    }

    /// Looks a preset up by name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown preset '{s}' (expected full or basic)"))
    }
}

/// Returns every built-in rule in report order.
#[must_use]
pub fn full_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ImageAlt),
        Box::new(Label),
        Box::new(PlaceholderAsLabel),
        Box::new(ButtonName),
        Box::new(ButtonTextQuality),
        Box::new(LinkName),
        Box::new(LinkTextQuality),
        Box::new(LinkSameTextDiffTarget),
        Box::new(ColorContrast),
        Box::new(DocumentTitle),
        Box::new(PageHasHeadingOne),
        Box::new(MultipleH1),
        Box::new(HtmlHasLang),
        Box::new(MetaViewport),
        Box::new(HeadingOrder),
        Box::new(EmptyHeading),
        Box::new(TableHeaders),
        Box::new(TableCaption),
    ]
}

/// Returns the basic rule set.
///
/// Includes the rules that report passes plus `color-contrast`.
#[must_use]
pub fn basic_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ImageAlt),
        Box::new(Label),
        Box::new(ButtonName),
        Box::new(LinkName),
        Box::new(ColorContrast),
        Box::new(DocumentTitle),
        Box::new(PageHasHeadingOne),
        Box::new(HtmlHasLang),
        Box::new(MetaViewport),
        Box::new(HeadingOrder),
    ]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    full_rules()
}
