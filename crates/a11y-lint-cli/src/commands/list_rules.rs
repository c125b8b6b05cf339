//! List rules command implementation.

use a11y_lint_rules::{all_rules, Preset};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<28} {:<10} Description", "Id", "Impact");
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        let note = if rule.surfaces_violations() {
            ""
        } else {
            " (not reported)"
        };
        println!(
            "{:<28} {:<10} {}{}",
            rule.id(),
            rule.impact().to_string(),
            rule.description(),
            note
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        let ids: Vec<_> = preset.rules().iter().map(|r| r.id()).collect();
        println!("  {:<8} - {} rule(s)", preset.name(), ids.len());
        println!("             {}", ids.join(", "));
    }

    println!("\nUse --rules to run specific rules, e.g.:");
    println!("  a11y-lint check index.html --rules image-alt,label");
}
