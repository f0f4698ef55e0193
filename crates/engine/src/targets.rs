// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolving the symlink handler's system target (§9 "Open question —
//! directory mapping").
//!
//! The source derives a target from the pack's absolute path by taking
//! its parent; that coupling is documented as an approximation, not part
//! of the contract. Here it is a single injectable function so callers
//! can substitute their own mapping without touching the handler.

use dodot_core::Pack;
use std::path::{Path, PathBuf};

/// Default `(pack, pack-relative-path) -> system-target` mapping: every
/// pack deploys directly under `home`, mirroring its relative path. `pack`
/// is threaded through for future per-pack overrides; the default mapping
/// ignores it.
pub fn resolve_target(_pack: &Pack, rel_path: &str, home: &Path) -> PathBuf {
    home.join(rel_path)
}

#[cfg(test)]
#[path = "targets_tests.rs"]
mod tests;
