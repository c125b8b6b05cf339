//! Link naming and link text rules (WCAG 2.4.4, 4.1.2).
//!
//! All three rules scan `<a>` elements that carry an `href`.

use a11y_lint_core::{AuditContext, Element, ElementRef, Evaluation, Impact, Rule};
use std::collections::HashMap;

use crate::text::{accessible_text, is_one_of};

/// Attributes consulted, in order, when a link has no text content.
const NAME_FALLBACKS: &[&str] = &["aria-label", "title"];

/// Link texts that make no sense out of context.
const VAGUE_PHRASES: &[&str] = &["click here", "here", "more", "read more", "link", "continue"];

fn links<'a>(ctx: &AuditContext<'a>) -> Vec<Element<'a>> {
    ctx.elements(&["a"])
        .into_iter()
        .filter(|a| a.has_attr("href"))
        .collect()
}

/// Links must have discernible text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkName;

impl LinkName {
    /// Rule id.
    pub const ID: &'static str = "link-name";
}

impl Rule for LinkName {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Serious
    }

    fn description(&self) -> &'static str {
        "Ensures links have discernible text"
    }

    fn help(&self) -> &'static str {
        "Links must have discernible text"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.name-role-value", "wcag2a", "wcag244", "wcag412"]
    }

    fn reports_pass(&self) -> bool {
        true
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let links = links(ctx);
        let findings = links
            .iter()
            .enumerate()
            .filter(|(_, a)| accessible_text(**a, NAME_FALLBACKS).is_none())
            .map(|(i, a)| {
                ElementRef::nth(*a, i)
                    .finding("Element has no text content, and no aria-label or title attribute")
            })
            .collect();

        Evaluation::over(links.len(), findings)
    }
}

/// Link text should make sense out of context.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTextQuality;

impl LinkTextQuality {
    /// Rule id.
    pub const ID: &'static str = "link-text-quality";
}

impl Rule for LinkTextQuality {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Moderate
    }

    fn description(&self) -> &'static str {
        "Ensures link text describes the link destination"
    }

    fn help(&self) -> &'static str {
        "Link text should be descriptive"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.name-role-value", "wcag2a", "wcag244"]
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let mut scanned = 0;
        let mut findings = Vec::new();

        for (i, link) in links(ctx).into_iter().enumerate() {
            let Some(text) = accessible_text(link, NAME_FALLBACKS) else {
                continue;
            };
            scanned += 1;
            if is_one_of(&text, VAGUE_PHRASES) {
                findings.push(ElementRef::nth(link, i).finding(format!(
                    "Link text \"{text}\" does not describe where the link goes"
                )));
            }
        }

        Evaluation::over(scanned, findings)
    }
}

/// Links with the same text should go to the same place.
///
/// The first link seen with a given text defines its destination; later
/// links with that text and a different `href` are flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkSameTextDiffTarget;

impl LinkSameTextDiffTarget {
    /// Rule id.
    pub const ID: &'static str = "link-same-text-diff-target";
}

impl Rule for LinkSameTextDiffTarget {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Minor
    }

    fn description(&self) -> &'static str {
        "Ensures links with the same accessible text point to the same destination"
    }

    fn help(&self) -> &'static str {
        "Links with the same text should have the same purpose"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.semantics", "best-practice"]
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let mut first_href: HashMap<String, &str> = HashMap::new();
        let mut scanned = 0;
        let mut findings = Vec::new();

        for (i, link) in links(ctx).into_iter().enumerate() {
            let Some(text) = accessible_text(link, NAME_FALLBACKS) else {
                continue;
            };
            let href = link.attr("href").unwrap_or_default();
            scanned += 1;

            match first_href.get(&text) {
                None => {
                    first_href.insert(text, href);
                }
                Some(&earlier) if earlier != href => {
                    findings.push(ElementRef::nth(link, i).finding(format!(
                        "Link text \"{text}\" is also used for a link to \"{earlier}\""
                    )));
                }
                Some(_) => {}
            }
        }

        Evaluation::over(scanned, findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::evaluate;

    #[test]
    fn test_anchor_without_href_is_ignored() {
        let eval = evaluate(&LinkName, r#"<a name="top"></a>"#);
        assert!(!eval.applicable);
    }

    #[test]
    fn test_empty_link_is_flagged() {
        let eval = evaluate(
            &LinkName,
            r#"<a href="/a">A</a><a href="/b"><img src="b.png"></a><a href="/c" title="C"></a>"#,
        );
        assert_eq!(eval.findings.len(), 1);
        assert_eq!(eval.findings[0].target, vec!["a:nth-child(2)"]);
    }

    #[test]
    fn test_vague_link_text() {
        let eval = evaluate(
            &LinkTextQuality,
            r#"<a href="/a">Read  more</a><a href="/b">Pricing</a><a href="/c">HERE</a>"#,
        );
        assert_eq!(eval.findings.len(), 2);
        assert_eq!(eval.findings[0].target, vec!["a:nth-child(1)"]);
        assert_eq!(eval.findings[1].target, vec!["a:nth-child(3)"]);
    }

    #[test]
    fn test_same_text_different_target() {
        let eval = evaluate(
            &LinkSameTextDiffTarget,
            r#"<a href="/a">Docs</a><a href="/a">Docs</a><a href="/b">Docs</a><a href="/c">Blog</a>"#,
        );
        assert!(eval.applicable);
        assert_eq!(eval.findings.len(), 1);
        assert_eq!(eval.findings[0].target, vec!["a:nth-child(3)"]);
        assert!(eval.findings[0].failure_summary.contains("\"/a\""));
    }

    #[test]
    fn test_same_text_is_case_sensitive() {
        let eval = evaluate(
            &LinkSameTextDiffTarget,
            r#"<a href="/a">Docs</a><a href="/b">docs</a>"#,
        );
        assert!(eval.findings.is_empty());
    }
}
