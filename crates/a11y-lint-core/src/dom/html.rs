//! Builds a [`Document`] from HTML text using `scraper`.

use super::Document;
use scraper::{ElementRef, Html};

impl Document {
    /// Parses a full HTML document.
    ///
    /// The HTML5 parser always produces an `<html>` root, so the result is
    /// never empty.
    #[must_use]
    pub fn parse_html(html: &str) -> Self {
        Self::from(&Html::parse_document(html))
    }
}

impl From<&Html> for Document {
    fn from(html: &Html) -> Self {
        let mut doc = Document::new();
        let root = html.root_element();
        let root_id = doc.create_root(root.value().name(), sorted_attrs(root));

        // Work list of (scraper element, parent id) pairs; children are
        // converted in order so the arena mirrors document order.
        let mut pending = vec![(root, root_id)];
        while let Some((element, id)) = pending.pop() {
            let mut child_elements = Vec::new();
            for child in element.children() {
                if let Some(child_el) = ElementRef::wrap(child) {
                    let child_id =
                        doc.append_element(id, child_el.value().name(), sorted_attrs(child_el));
                    child_elements.push((child_el, child_id));
                } else if let Some(text) = child.value().as_text() {
                    doc.append_text(id, &**text);
                }
            }
            pending.extend(child_elements.into_iter().rev());
        }

        doc
    }
}

/// Attribute storage order in `scraper` is an implementation detail, so
/// attributes are sorted by name to keep serialized excerpts stable.
fn sorted_attrs(element: ElementRef<'_>) -> Vec<(String, String)> {
    let mut attrs: Vec<(String, String)> = element
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    attrs.sort_by(|a, b| a.0.cmp(&b.0));
    attrs
}
