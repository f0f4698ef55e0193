// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in trigger implementations (§4.2).
//!
//! Each trigger is stateless and constructed fresh from its declared
//! options by [`trigger_factory`]; the `filename`/`glob`/`directory`
//! triggers all operate purely on the entry's basename, since pack
//! scanning is flat (§4.1).

use dodot_core::{FileInfo, Options, Trigger, TriggerFactoryError, TriggerKind};
use std::collections::BTreeMap;

/// Exact, case-sensitive basename match.
pub struct FilenameTrigger {
    name: String,
}

impl Trigger for FilenameTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Specific
    }

    fn matches(&self, rel_path: &str, _info: FileInfo) -> (bool, BTreeMap<String, String>) {
        (rel_path == self.name, BTreeMap::new())
    }
}

/// Glob-pattern basename match (e.g. `*aliases.sh`).
pub struct GlobTrigger {
    pattern: glob::Pattern,
}

impl Trigger for GlobTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Specific
    }

    fn matches(&self, rel_path: &str, _info: FileInfo) -> (bool, BTreeMap<String, String>) {
        (self.pattern.matches(rel_path), BTreeMap::new())
    }
}

/// Matches only a directory whose basename equals (or glob-matches) the
/// configured name.
pub struct DirectoryTrigger {
    pattern: glob::Pattern,
}

impl Trigger for DirectoryTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Specific
    }

    fn matches(&self, rel_path: &str, info: FileInfo) -> (bool, BTreeMap<String, String>) {
        (info.is_dir && self.pattern.matches(rel_path), BTreeMap::new())
    }
}

/// Matches any entry; the fallback phase run only when no specific rule
/// fired (§4.3 step 7).
pub struct CatchallTrigger;

impl Trigger for CatchallTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Catchall
    }

    fn matches(&self, _rel_path: &str, _info: FileInfo) -> (bool, BTreeMap<String, String>) {
        (true, BTreeMap::new())
    }
}

fn option_str<'a>(options: &'a Options, key: &str, trigger: &str) -> Result<&'a str, TriggerFactoryError> {
    options
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| TriggerFactoryError::InvalidOptions {
            trigger: trigger.to_string(),
            reason: format!("missing required string option '{key}'"),
        })
}

fn compile_pattern(pattern: &str, trigger: &str) -> Result<glob::Pattern, TriggerFactoryError> {
    glob::Pattern::new(pattern).map_err(|source| TriggerFactoryError::InvalidOptions {
        trigger: trigger.to_string(),
        reason: format!("invalid glob pattern '{pattern}': {source}"),
    })
}

/// Constructs a built-in trigger from its name and declared options
/// (§3 "Trigger", §4.2).
pub fn trigger_factory(name: &str, options: &Options) -> Result<Box<dyn Trigger>, TriggerFactoryError> {
    match name {
        "filename" => {
            let pattern = option_str(options, "pattern", name)?;
            Ok(Box::new(FilenameTrigger { name: pattern.to_string() }))
        }
        "glob" => {
            let pattern = option_str(options, "pattern", name)?;
            Ok(Box::new(GlobTrigger { pattern: compile_pattern(pattern, name)? }))
        }
        "directory" => {
            let pattern = option_str(options, "pattern", name)?;
            Ok(Box::new(DirectoryTrigger { pattern: compile_pattern(pattern, name)? }))
        }
        "catchall" => Ok(Box::new(CatchallTrigger)),
        other => Err(TriggerFactoryError::UnknownTrigger(other.to_string())),
    }
}

#[cfg(test)]
#[path = "triggers_tests.rs"]
mod tests;
