// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared clearing logic for linking handlers.
//!
//! Each linking handler's state directory mirrors the symlinks it has
//! deployed: one bookkeeping symlink per deployed entry, whose target is
//! the real path planted in the user's environment (`$HOME`, a PATH
//! directory, a shell profile). `clear` walks that mirror and removes
//! what it points at, rather than hard-coding handler-specific lookup
//! logic three times over.

use dodot_core::{ClearContext, ClearedItem, HandlerError};
use std::path::Path;

pub fn clear_linked_state(
    handler: &str,
    context: &ClearContext,
    description: &str,
) -> Result<Vec<ClearedItem>, HandlerError> {
    let entries = match std::fs::read_dir(&context.state_dir) {
        Ok(entries) => entries,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(HandlerError::ProcessFailed {
                handler: handler.to_string(),
                reason: format!("reading state directory {}: {source}", context.state_dir.display()),
            })
        }
    };

    let mut cleared = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| HandlerError::ProcessFailed {
            handler: handler.to_string(),
            reason: format!("reading state directory entry: {source}"),
        })?;
        let bookmark = entry.path();
        let Ok(target) = std::fs::read_link(&bookmark) else { continue };
        remove_if_present(handler, &target)?;
        cleared.push(ClearedItem { description: format!("{description}: {}", target.display()), path: target });
    }
    cleared.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(cleared)
}

fn remove_if_present(handler: &str, target: &Path) -> Result<(), HandlerError> {
    match std::fs::symlink_metadata(target) {
        Ok(_) => std::fs::remove_file(target).map_err(|source| HandlerError::ProcessFailed {
            handler: handler.to_string(),
            reason: format!("removing {}: {source}", target.display()),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(HandlerError::ProcessFailed {
            handler: handler.to_string(),
            reason: format!("inspecting {}: {source}", target.display()),
        }),
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
