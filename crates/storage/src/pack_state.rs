// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Removing a linking handler's per-pack deployed-state directory
//! (§3 "State directory", §4.9 step 2).

use crate::error::StorageError;
use std::path::Path;
use tracing::debug;

/// Remove `<data>/packs/<pack>/<state-dir>` entirely. A missing directory
/// is not an error (§4.9 step 3).
pub fn remove_pack_state_dir(state_dir: &Path) -> Result<(), StorageError> {
    match std::fs::remove_dir_all(state_dir) {
        Ok(()) => {
            debug!(path = %state_dir.display(), "removed pack state directory");
            Ok(())
        }
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StorageError::Remove { path: state_dir.to_path_buf(), source }),
    }
}

#[cfg(test)]
#[path = "pack_state_tests.rs"]
mod tests;
