// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run-once provisioning records (§3 "Sentinel", §4.6).

use std::path::{Path, PathBuf};

/// Records that a handler has already provisioned a given piece of content
/// for a pack, so re-running `deploy` does not repeat a one-shot action
/// (e.g. re-running an install script) unless the content changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinel {
    pub pack: String,
    pub handler: String,
    pub content_hash: String,
}

impl Sentinel {
    pub fn new(pack: impl Into<String>, handler: impl Into<String>, content_hash: impl Into<String>) -> Self {
        Self { pack: pack.into(), handler: handler.into(), content_hash: content_hash.into() }
    }

    /// Path to this sentinel's record file under a handler's sentinel
    /// directory: `<sentinel_dir>/<pack>`, content = the hash itself, no
    /// framing (§3, §6).
    pub fn path_in(&self, sentinel_dir: &Path) -> PathBuf {
        sentinel_dir.join(&self.pack)
    }

    /// Whether `recorded_hash` (read from disk, if any) indicates this
    /// exact content has already been provisioned.
    pub fn is_satisfied_by(&self, recorded_hash: Option<&str>) -> bool {
        recorded_hash == Some(self.content_hash.as_str())
    }
}

/// SHA-256 hex digest of `content`, the hash recorded and compared by the
/// run-once filter (§4.6).
pub fn content_hash(content: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
#[path = "sentinel_tests.rs"]
mod tests;
