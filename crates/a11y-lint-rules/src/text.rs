//! Accessible text resolution shared by the name and text-quality rules.

use a11y_lint_core::Element;

/// Collapses runs of whitespace and trims the ends.
pub(crate) fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves the text assistive technology would announce for `element`.
///
/// Precedence: text content, then each attribute in `fallbacks` in order.
/// Returns the first non-blank candidate, whitespace-normalized.
pub(crate) fn accessible_text(element: Element<'_>, fallbacks: &[&str]) -> Option<String> {
    let content = normalize(&element.text_content());
    if !content.is_empty() {
        return Some(content);
    }

    fallbacks
        .iter()
        .filter_map(|attr| element.attr(attr))
        .map(normalize)
        .find(|value| !value.is_empty())
}

/// Case-insensitive membership in a phrase list.
pub(crate) fn is_one_of(text: &str, phrases: &[&str]) -> bool {
    let lower = text.to_lowercase();
    phrases.iter().any(|p| *p == lower)
}

/// Lowercased `type` attribute of an `<input>`, defaulting to "text".
pub(crate) fn input_type(element: Element<'_>) -> String {
    element
        .attr("type")
        .map_or_else(|| "text".to_string(), |t| t.trim().to_ascii_lowercase())
}
