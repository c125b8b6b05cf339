//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# a11y-lint configuration

# Rule preset: "full" (every rule) or "basic" (core WCAG A/AA checks)
preset = "full"

# Exit with status 1 when a violation at or above this impact is found:
# "minor", "moderate", "serious" or "critical"
fail_on = "minor"

[limits]
# Findings kept per violated rule; the rest are counted but not listed
max_nodes_per_rule = 5
# color-contrast stops scanning after this many findings
max_contrast_findings = 10

# Rule configurations, keyed by rule id

# [rules.link-same-text-diff-target]
# enabled = false

# [rules.meta-viewport]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("a11y-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created a11y-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit a11y-lint.toml to choose a preset and disable rules");
    println!("  2. Run: a11y-lint check index.html");

    Ok(())
}
