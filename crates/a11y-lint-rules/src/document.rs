//! Document-level rules: title, language and viewport.
//!
//! These rules always apply, so a conforming document yields a pass.

use a11y_lint_core::{AuditContext, ElementRef, Evaluation, Impact, Rule};

/// Documents must have a non-empty `<title>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTitle;

impl DocumentTitle {
    /// Rule id.
    pub const ID: &'static str = "document-title";
}

impl Rule for DocumentTitle {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Serious
    }

    fn description(&self) -> &'static str {
        "Ensures each HTML document contains a non-empty <title> element"
    }

    fn help(&self) -> &'static str {
        "Documents must have <title> element to aid in navigation"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.text-alternatives", "wcag2a", "wcag242"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let finding = match ctx.document.first_by_tag("title") {
            None => Some(
                ElementRef::singleton(ctx.root)
                    .finding("Document does not have a <title> element"),
            ),
            Some(title) if title.text_content().trim().is_empty() => {
                Some(ElementRef::singleton(title).finding("Document <title> element is empty"))
            }
            Some(_) => None,
        };

        Evaluation::applicable(finding.into_iter().collect())
    }
}

/// The `<html>` element must declare a language.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlHasLang;

impl HtmlHasLang {
    /// Rule id.
    pub const ID: &'static str = "html-has-lang";
}

impl Rule for HtmlHasLang {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Serious
    }

    fn description(&self) -> &'static str {
        "Ensures every HTML document has a lang attribute"
    }

    fn help(&self) -> &'static str {
        "<html> element must have a lang attribute"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.language", "wcag2a", "wcag311"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let mut findings = Vec::new();
        if !ctx.root.has_attr("lang") {
            findings.push(
                ElementRef::singleton(ctx.root)
                    .finding("The <html> element does not have a lang attribute"),
            );
        }
        Evaluation::applicable(findings)
    }
}

/// Documents should declare a viewport for mobile rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaViewport;

impl MetaViewport {
    /// Rule id.
    pub const ID: &'static str = "meta-viewport";
}

impl Rule for MetaViewport {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Moderate
    }

    fn description(&self) -> &'static str {
        "Ensures the document declares a <meta name=\"viewport\"> element"
    }

    fn help(&self) -> &'static str {
        "Documents should declare a viewport so content reflows on small screens"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.sensory-and-visual-cues", "best-practice"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let scope = ctx.document.first_by_tag("head").unwrap_or(ctx.root);
        let has_viewport = scope
            .find_all(&["meta"])
            .iter()
            .any(|m| m.attr("name").is_some_and(|n| n.trim().eq_ignore_ascii_case("viewport")));

        let mut findings = Vec::new();
        if !has_viewport {
            findings.push(
                ElementRef::singleton(scope)
                    .finding("Document does not have a <meta name=\"viewport\"> element"),
            );
        }
        Evaluation::applicable(findings)
    }
}
