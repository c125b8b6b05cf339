//! Context type for rule execution.

use crate::dom::{Document, Element};
use crate::shaper::ResultLimits;

/// Context provided to rules.
///
/// Holds the document under evaluation, its root element and the result
/// limits rules must honor while collecting findings.
#[derive(Debug, Clone, Copy)]
pub struct AuditContext<'a> {
    /// The document being evaluated.
    pub document: &'a Document,
    /// Root element of the document.
    pub root: Element<'a>,
    /// Caps applied to findings.
    pub limits: ResultLimits,
}

impl<'a> AuditContext<'a> {
    /// Creates a context for a document, or `None` if it has no root.
    #[must_use]
    pub fn new(document: &'a Document, limits: ResultLimits) -> Option<Self> {
        let root = document.root()?;
        Some(Self {
            document,
            root,
            limits,
        })
    }

    /// Returns every element with one of the given tags, in document order.
    #[must_use]
    pub fn elements(&self, tags: &[&str]) -> Vec<Element<'a>> {
        self.root.find_all(tags)
    }
}
