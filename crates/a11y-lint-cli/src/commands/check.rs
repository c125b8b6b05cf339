//! Check command implementation.

use a11y_lint_core::{Config, Document, Engine, Impact, RuleBox};
use a11y_lint_rules::{all_rules, Preset};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options collected from the `check` subcommand.
pub struct CheckOptions {
    /// Input file, or `-` for stdin.
    pub path: PathBuf,
    /// URL override for the report.
    pub url: Option<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Preset override.
    pub preset: Option<Preset>,
    /// Comma-separated rule ids.
    pub rules: Option<String>,
    /// Impact threshold override.
    pub fail_on: Option<String>,
}

/// Runs the check command.
pub fn run(opts: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = match source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let threshold = match opts.fail_on.as_deref() {
        Some(name) => match Impact::from_name(name) {
            Some(impact) => impact,
            None => bail!("Unknown impact '{name}' (expected minor, moderate, serious or critical)"),
        },
        None => config.fail_on_impact()?,
    };

    let rules = if let Some(filter) = &opts.rules {
        let ids: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&ids)
    } else {
        select_preset(opts.preset, &config)?.rules()
    };

    let engine = Engine::builder()
        .config(config)
        .rules(rules)
        .build()
        .context("Failed to build engine")?;

    let (html, default_url) = read_input(&opts.path)?;
    let url = opts.url.clone().unwrap_or(default_url);

    tracing::info!("Auditing {} with {} rules", url, engine.rule_count());

    let document = Document::parse_html(&html);
    let report = engine
        .evaluate(&document, &url, Utc::now())
        .context("Audit failed")?;

    super::output::print(&report, opts.format)?;

    if report.has_violations_at(threshold) {
        std::process::exit(1);
    }

    Ok(())
}

fn select_preset(flag: Option<Preset>, config: &Config) -> Result<Preset> {
    if let Some(preset) = flag {
        return Ok(preset);
    }
    match config.preset.as_deref() {
        Some(name) => Preset::from_name(name)
            .with_context(|| format!("Unknown preset '{name}' in config (expected full or basic)")),
        None => Ok(Preset::default()),
    }
}

fn read_input(path: &Path) -> Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read HTML from stdin")?;
        return Ok((html, "stdin".to_string()));
    }

    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((html, path.display().to_string()))
}

fn filter_rules(ids: &[&str]) -> Vec<RuleBox> {
    let mut available = all_rules();
    let mut rules: Vec<RuleBox> = Vec::new();

    for id in ids {
        match available.iter().position(|r| r.id() == *id) {
            Some(index) => rules.push(available.swap_remove(index)),
            None if rules.iter().any(|r| r.id() == *id) => {}
            None => tracing::warn!("Unknown rule: {}", id),
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_requested_order_and_drops_unknown() {
        let rules = filter_rules(&["heading-order", "no-such-rule", "image-alt", "image-alt"]);
        let ids: Vec<_> = rules.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["heading-order", "image-alt"]);
    }

    #[test]
    fn preset_flag_beats_config() {
        let config = Config::parse("preset = \"basic\"").unwrap();
        assert_eq!(select_preset(Some(Preset::Full), &config).unwrap(), Preset::Full);
        assert_eq!(select_preset(None, &config).unwrap(), Preset::Basic);
        assert_eq!(select_preset(None, &Config::default()).unwrap(), Preset::Full);
    }

    #[test]
    fn unknown_config_preset_is_an_error() {
        let config = Config::parse("preset = \"strict\"").unwrap();
        assert!(select_preset(None, &config).is_err());
    }

    #[test]
    fn reads_file_input_with_path_as_url() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("page.html");
        std::fs::write(&file, "<html></html>").unwrap();

        let (html, url) = read_input(&file).unwrap();
        assert_eq!(html, "<html></html>");
        assert_eq!(url, file.display().to_string());
    }
}
