// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run-once provisioning state (C6, §4.6).

use dodot_core::{content_hash, Action, ActionKind, DataPaths, DodotError};
use dodot_storage::read_sentinel;
use std::path::PathBuf;
use tracing::debug;

/// Drop provisioning actions whose content hash already matches the
/// recorded sentinel, unless `force` is set (§4.6).
pub fn filter_run_once(actions: Vec<Action>, data: &DataPaths, force: bool) -> Result<Vec<Action>, DodotError> {
    let mut kept = Vec::with_capacity(actions.len());
    for action in actions {
        let Some((handler_name, source)) = provisioning_source(&action) else {
            kept.push(action);
            continue;
        };
        if force {
            kept.push(action);
            continue;
        }

        let bytes = std::fs::read(&source).map_err(|source_err| DodotError::FileAccess { path: source, source: source_err })?;
        let hash = content_hash(&bytes);
        let sentinel_dir = data.sentinel_dir(handler_name);
        let recorded = read_sentinel(&sentinel_dir, &action.pack_name)
            .map_err(|error| DodotError::ActionExecute(error.to_string()))?;

        if recorded.as_deref() == Some(hash.as_str()) {
            debug!(pack = %action.pack_name, handler = handler_name, "dropping provisioning action: content unchanged");
            continue;
        }
        kept.push(action);
    }
    Ok(kept)
}

fn provisioning_source(action: &Action) -> Option<(&'static str, PathBuf)> {
    match &action.kind {
        ActionKind::Brew { brewfile_path } => Some(("homebrew", brewfile_path.clone())),
        ActionKind::RunScript { script_path } => Some(("install", script_path.clone())),
        _ => None,
    }
}

#[cfg(test)]
#[path = "run_once_tests.rs"]
mod tests;
