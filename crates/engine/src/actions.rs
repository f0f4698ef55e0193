// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The action generator (C5, §4.5): cross-pack symlink conflict check,
//! grouped dispatch, handler invocation.

use crate::targets::resolve_target;
use dodot_core::{fingerprint, Action, ConflictingSource, DodotError, Match, Pack, SymlinkConflict};
use dodot_handlers::{HandlerRegistry, RESOLVED_TARGET_KEY};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Compute each symlink match's system target and, before any handler
/// runs, reject the whole batch if two different packs claim the same
/// target (§4.5 step 1).
fn inject_symlink_targets(
    matches: &[Match],
    packs_by_name: &BTreeMap<String, &Pack>,
    home: &Path,
) -> Result<Vec<Match>, DodotError> {
    let mut resolved = Vec::with_capacity(matches.len());
    let mut by_target: BTreeMap<PathBuf, Vec<ConflictingSource>> = BTreeMap::new();

    for m in matches {
        if m.handler_name != "symlink" {
            resolved.push(m.clone());
            continue;
        }
        let Some(pack) = packs_by_name.get(&m.pack) else {
            resolved.push(m.clone());
            continue;
        };
        let target = resolve_target(pack, &m.pack_relative_path, home);
        by_target
            .entry(target.clone())
            .or_default()
            .push(ConflictingSource { pack: m.pack.clone(), rel_path: m.pack_relative_path.clone() });

        let mut m = m.clone();
        m.metadata.insert(RESOLVED_TARGET_KEY.to_string(), target.to_string_lossy().into_owned());
        resolved.push(m);
    }

    for (target, sources) in &by_target {
        let distinct_packs: BTreeSet<&str> = sources.iter().map(|s| s.pack.as_str()).collect();
        if distinct_packs.len() > 1 {
            return Err(DodotError::SymlinkConflict(SymlinkConflict { target: target.clone(), sources: sources.clone() }));
        }
    }

    Ok(resolved)
}

fn group_key(m: &Match) -> (String, String, String) {
    (m.handler_name.clone(), m.pack.clone(), fingerprint(&m.handler_options))
}

/// Turn a flat list of matches into the ordered list of actions every
/// claimed handler produced (§4.5).
pub fn generate_actions(
    matches: &[Match],
    packs: &[Pack],
    registry: &HandlerRegistry,
    home: &Path,
) -> Result<Vec<Action>, DodotError> {
    let packs_by_name: BTreeMap<String, &Pack> = packs.iter().map(|p| (p.name.clone(), p)).collect();
    let resolved = inject_symlink_targets(matches, &packs_by_name, home)?;

    let mut groups: BTreeMap<(String, String, String), Vec<Match>> = BTreeMap::new();
    for m in resolved {
        groups.entry(group_key(&m)).or_default().push(m);
    }

    let mut actions = Vec::new();
    for ((handler_name, pack_name, _fingerprint), mut group) in groups {
        group.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let options = group[0].handler_options.clone();
        let handler = registry.build(&handler_name, &options)?;
        handler
            .validate_options()
            .map_err(|source| DodotError::HandlerInvalid { handler: handler_name.clone(), reason: source.to_string() })?;

        debug!(handler = %handler_name, pack = %pack_name, matches = group.len(), "dispatching handler group");
        let produced = handler
            .process(&group)
            .map_err(|source| DodotError::HandlerExecute { handler: handler_name.clone(), reason: source.to_string() })?;
        actions.extend(produced);
    }

    Ok(actions)
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
