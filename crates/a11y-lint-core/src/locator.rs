//! Human-readable element references for findings.
//!
//! Selectors are `tag:nth-child(k)` where `k` is the 1-based position of the
//! element in the list the rule scanned, not its position among DOM siblings.
//! Reports depend on this numbering staying stable.

use crate::dom::Element;
use crate::types::Finding;

/// Excerpt length used for elements with potentially large subtrees.
pub const LARGE_ELEMENT_EXCERPT: usize = 200;

/// A located element: the element, its display selector and markup excerpt.
#[derive(Debug, Clone)]
pub struct ElementRef<'a> {
    element: Element<'a>,
    selector: String,
    html: String,
}

impl<'a> ElementRef<'a> {
    /// Locates the element at 0-based `index` of a rule's element list.
    #[must_use]
    pub fn nth(element: Element<'a>, index: usize) -> Self {
        Self {
            selector: format!("{}:nth-child({})", element.name(), index + 1),
            html: element.outer_html(),
            element,
        }
    }

    /// Like [`ElementRef::nth`], with the excerpt cut to `max_chars`.
    #[must_use]
    pub fn nth_excerpt(element: Element<'a>, index: usize, max_chars: usize) -> Self {
        Self {
            selector: format!("{}:nth-child({})", element.name(), index + 1),
            html: element.html_excerpt(max_chars),
            element,
        }
    }

    /// Locates a singleton element (`html`, `title`, ...) by its bare tag.
    ///
    /// Only the opening tag is kept, since these elements may wrap the whole
    /// page.
    #[must_use]
    pub fn singleton(element: Element<'a>) -> Self {
        Self {
            selector: element.name().to_string(),
            html: element.opening_tag(),
            element,
        }
    }

    /// Returns the referenced element.
    #[must_use]
    pub fn element(&self) -> Element<'a> {
        self.element
    }

    /// Returns the display selector.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Returns the markup excerpt.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Turns this reference into a finding.
    #[must_use]
    pub fn finding(self, failure_summary: impl Into<String>) -> Finding {
        Finding::new(self.html, self.selector, failure_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    const NO_ATTRS: [(&str, &str); 0] = [];

    #[test]
    fn nth_uses_one_based_ordinal() {
        let mut doc = Document::new();
        let root = doc.create_root("html", NO_ATTRS);
        doc.append_element(root, "img", [("src", "a.png")]);
        let img = doc.first_by_tag("img").unwrap();

        let located = ElementRef::nth(img, 2);
        assert_eq!(located.element().id(), img.id());
        assert_eq!(located.selector(), "img:nth-child(3)");
        assert_eq!(located.html(), "<img src=\"a.png\">");
    }

    #[test]
    fn excerpt_is_bounded() {
        let mut doc = Document::new();
        let root = doc.create_root("html", NO_ATTRS);
        let table = doc.append_element(root, "table", NO_ATTRS);
        doc.append_text(table, "x".repeat(500));
        let table = doc.first_by_tag("table").unwrap();

        let located = ElementRef::nth_excerpt(table, 0, LARGE_ELEMENT_EXCERPT);
        assert_eq!(located.html().chars().count(), LARGE_ELEMENT_EXCERPT + 3);
        assert!(located.html().ends_with("..."));

        let short = ElementRef::nth_excerpt(table, 0, 10_000);
        assert!(!short.html().ends_with("..."));
    }

    #[test]
    fn singleton_keeps_opening_tag_only() {
        let mut doc = Document::new();
        let root = doc.create_root("html", [("lang", "en")]);
        doc.append_element(root, "body", NO_ATTRS);

        let located = ElementRef::singleton(doc.root().unwrap());
        let finding = located.finding("missing");
        assert_eq!(finding.target, vec!["html"]);
        assert_eq!(finding.html, "<html lang=\"en\">");
    }
}
