//! Data table rules (WCAG 1.3.1).

use a11y_lint_core::{AuditContext, ElementRef, Evaluation, Impact, Rule, LARGE_ELEMENT_EXCERPT};

/// Data tables must have header cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableHeaders;

impl TableHeaders {
    /// Rule id.
    pub const ID: &'static str = "table-headers";
}

impl Rule for TableHeaders {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Serious
    }

    fn description(&self) -> &'static str {
        "Ensures each data table has header cells"
    }

    fn help(&self) -> &'static str {
        "Tables must use <th> elements for headers"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.tables", "wcag2a", "wcag131"]
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let tables = ctx.elements(&["table"]);
        let findings = tables
            .iter()
            .enumerate()
            .filter(|(_, t)| t.find_all(&["th"]).is_empty())
            .map(|(i, t)| {
                ElementRef::nth_excerpt(*t, i, LARGE_ELEMENT_EXCERPT)
                    .finding("Table has no <th> header cells")
            })
            .collect();

        Evaluation::over(tables.len(), findings)
    }
}

/// Data tables should have a caption.
///
/// Evaluated but not reported: the engine logs its findings without adding
/// a violation. Flipping [`Rule::surfaces_violations`] would start
/// reporting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableCaption;

impl TableCaption {
    /// Rule id.
    pub const ID: &'static str = "table-caption";
}

impl Rule for TableCaption {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn impact(&self) -> Impact {
        Impact::Minor
    }

    fn description(&self) -> &'static str {
        "Ensures each data table has a <caption>"
    }

    fn help(&self) -> &'static str {
        "Tables should have a caption describing their content"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["cat.tables", "best-practice"]
    }

    fn surfaces_violations(&self) -> bool {
        false
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Evaluation {
        let tables = ctx.elements(&["table"]);
        let findings = tables
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.has_child("caption"))
            .map(|(i, t)| {
                ElementRef::nth_excerpt(*t, i, LARGE_ELEMENT_EXCERPT)
                    .finding("Table has no <caption> element")
            })
            .collect();

        Evaluation::over(tables.len(), findings)
    }
}
