// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading and writing provisioning sentinels under a handler's sentinel
//! directory (§3 "Sentinel", §4.6, §6).

use crate::error::StorageError;
use dodot_core::Sentinel;
use std::path::Path;
use tracing::debug;

/// Read the recorded content hash for `pack` under `sentinel_dir`, if any
/// sentinel has been written yet.
pub fn read_sentinel(sentinel_dir: &Path, pack: &str) -> Result<Option<String>, StorageError> {
    let path = sentinel_dir.join(pack);
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content.trim().to_string())),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Read { path, source }),
    }
}

/// Write `sentinel`'s content hash under `sentinel_dir`, creating the
/// directory if needed. The file content is the hex hash, verbatim.
pub fn write_sentinel(sentinel_dir: &Path, sentinel: &Sentinel) -> Result<(), StorageError> {
    std::fs::create_dir_all(sentinel_dir)
        .map_err(|source| StorageError::Write { path: sentinel_dir.to_path_buf(), source })?;
    let path = sentinel.path_in(sentinel_dir);
    std::fs::write(&path, &sentinel.content_hash)
        .map_err(|source| StorageError::Write { path: path.clone(), source })?;
    debug!(pack = %sentinel.pack, handler = %sentinel.handler, "wrote sentinel");
    Ok(())
}

/// Remove the sentinel for `pack` under `sentinel_dir`, if present
/// (§4.9 step 2, provisioning handler clear).
pub fn delete_sentinel(sentinel_dir: &Path, pack: &str) -> Result<(), StorageError> {
    let path = sentinel_dir.join(pack);
    match std::fs::remove_file(&path) {
        Ok(()) => {
            debug!(pack, "removed sentinel");
            Ok(())
        }
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StorageError::Remove { path, source }),
    }
}

#[cfg(test)]
#[path = "sentinel_store_tests.rs"]
mod tests;
