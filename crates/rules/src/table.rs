// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The built-in default rule table (§4.2).

use dodot_core::Rule;

/// The ordered built-in rule set (§4.2): populated once, treated as
/// read-only for the lifetime of a run.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new("homebrew-brewfile", "glob", "homebrew", 100)
            .with_trigger_option("pattern", "Brewfile"),
        Rule::new("install-script", "glob", "install", 90)
            .with_trigger_option("pattern", "install.sh"),
        Rule::new("shell-aliases", "glob", "shell", 80)
            .with_trigger_option("pattern", "*aliases.sh"),
        Rule::new("bin-directory", "directory", "path", 70)
            .with_trigger_option("pattern", "bin"),
        Rule::new("symlink-catchall", "catchall", "symlink", 0),
    ]
}

/// Rules with `enabled == false` dropped, order preserved (§4.2).
pub fn filter_enabled(rules: &[Rule]) -> Vec<Rule> {
    rules.iter().filter(|rule| rule.enabled).cloned().collect()
}

/// Stable sort by `priority` descending; rules with equal priority keep
/// their relative (declared) position (§4.2).
pub fn sort_by_priority(rules: &mut [Rule]) {
    rules.sort_by(|a, b| b.priority.cmp(&a.priority));
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
