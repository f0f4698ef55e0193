// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The trigger engine (C3, §4.3): turn one pack's immediate children into
//! a list of [`Match`]es.

use dodot_core::{DodotError, FileInfo, Match, Pack, Rule, Trigger, TriggerKind, OVERRIDE_PRIORITY, OVERRIDE_TRIGGER_NAME};
use dodot_rules::trigger_factory;
use tracing::{debug, trace, warn};

const PACK_CONFIG_FILE: &str = ".dodot.toml";

struct CompiledRule {
    rule: Rule,
    trigger: Box<dyn Trigger>,
}

/// Scan one pack against the given rule table, producing its ordered list
/// of matches (§4.3). A disabled pack (`.dodot.toml` `disabled = true`)
/// yields no matches.
pub fn scan(pack: &Pack, rules: &[Rule]) -> Result<Vec<Match>, DodotError> {
    if pack.config.disabled {
        debug!(pack = %pack.name, "pack disabled, skipping scan");
        return Ok(Vec::new());
    }

    let (specific, catchall) = compile_rules(pack, rules);

    let read_dir = std::fs::read_dir(&pack.path)
        .map_err(|source| DodotError::PackAccess { pack: pack.name.clone(), source })?;
    let mut entries: Vec<_> = read_dir
        .collect::<std::io::Result<_>>()
        .map_err(|source| DodotError::PackAccess { pack: pack.name.clone(), source })?;
    entries.sort_by_key(|e| e.file_name());

    let mut matches = Vec::new();
    for entry in entries {
        let path = entry.path();
        let Some(rel_path) = path.file_name().and_then(|n| n.to_str()) else { continue };
        if rel_path == PACK_CONFIG_FILE {
            continue;
        }

        if pack.config.is_ignored(rel_path) {
            trace!(pack = %pack.name, rel_path, "ignored");
            continue;
        }

        if let Some(over) = pack.config.find_override(rel_path) {
            trace!(pack = %pack.name, rel_path, handler = %over.handler, "override");
            matches.push(Match {
                trigger_name: OVERRIDE_TRIGGER_NAME.to_string(),
                pack: pack.name.clone(),
                pack_relative_path: rel_path.to_string(),
                absolute_path: path,
                metadata: Default::default(),
                handler_name: over.handler.clone(),
                handler_options: over.options.clone(),
                priority: OVERRIDE_PRIORITY,
            });
            continue;
        }

        let meta = match std::fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(error) => {
                warn!(pack = %pack.name, rel_path, %error, "skipping entry: could not stat");
                continue;
            }
        };
        let info = FileInfo {
            is_dir: meta.is_dir() || (meta.is_symlink() && path.is_dir()),
            is_symlink: meta.is_symlink(),
        };

        if let Some(m) = try_match(&specific, pack, rel_path, &path, info) {
            trace!(pack = %pack.name, rel_path, handler = %m.handler_name, "specific match");
            matches.push(m);
            continue;
        }
        if let Some(m) = try_match(&catchall, pack, rel_path, &path, info) {
            trace!(pack = %pack.name, rel_path, handler = %m.handler_name, "catchall match");
            matches.push(m);
            continue;
        }
        trace!(pack = %pack.name, rel_path, "unmatched");
    }

    Ok(matches)
}

fn compile_rules(pack: &Pack, rules: &[Rule]) -> (Vec<CompiledRule>, Vec<CompiledRule>) {
    let mut specific = Vec::new();
    let mut catchall = Vec::new();
    for rule in rules.iter().filter(|r| r.enabled).cloned() {
        match trigger_factory(&rule.trigger_name, &rule.trigger_options) {
            Ok(trigger) => match trigger.kind() {
                TriggerKind::Specific => specific.push(CompiledRule { rule, trigger }),
                TriggerKind::Catchall => catchall.push(CompiledRule { rule, trigger }),
            },
            Err(error) => warn!(pack = %pack.name, rule = %rule.name, %error, "skipping rule: trigger factory failed"),
        }
    }
    specific.sort_by(|a, b| b.rule.priority.cmp(&a.rule.priority));
    catchall.sort_by(|a, b| b.rule.priority.cmp(&a.rule.priority));
    (specific, catchall)
}

fn try_match(
    compiled: &[CompiledRule],
    pack: &Pack,
    rel_path: &str,
    absolute_path: &std::path::Path,
    info: FileInfo,
) -> Option<Match> {
    for candidate in compiled {
        let (matched, metadata) = candidate.trigger.matches(rel_path, info);
        if matched {
            return Some(Match {
                trigger_name: candidate.rule.trigger_name.clone(),
                pack: pack.name.clone(),
                pack_relative_path: rel_path.to_string(),
                absolute_path: absolute_path.to_path_buf(),
                metadata,
                handler_name: candidate.rule.handler_name.clone(),
                handler_options: candidate.rule.handler_options.clone(),
                priority: candidate.rule.priority,
            });
        }
    }
    None
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
