// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pack discovery (C1, §4.1): enumerate immediate children of the
//! dotfiles root and turn each into a [`Pack`].

use dodot_core::{DodotError, Pack, PackConfig};
use std::path::Path;
use tracing::warn;

const IGNORED_NAMES: &[&str] = &[".git", ".svn", ".hg", "node_modules", ".DS_Store"];
const IGNORED_GLOBS: &[&str] = &["*.swp", "*~", "#*#"];
const DODOTIGNORE: &str = ".dodotignore";

/// Enumerate, filter, and configure every pack under `root`, sorted by
/// name (§4.1). Malformed `.dodot.toml` files are logged and dropped,
/// not fatal.
pub fn discover(root: &Path) -> Result<Vec<Pack>, DodotError> {
    if !root.is_dir() {
        return Err(DodotError::InvalidInput(format!("dotfiles root '{}' is not a directory", root.display())));
    }

    let entries = std::fs::read_dir(root)
        .map_err(|source| DodotError::FileAccess { path: root.to_path_buf(), source })?;

    let mut packs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DodotError::FileAccess { path: root.to_path_buf(), source })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else { continue };
        if is_excluded(name) {
            continue;
        }
        if path.join(DODOTIGNORE).is_file() {
            continue;
        }
        match PackConfig::load(&path) {
            Ok(config) => packs.push(Pack::new(name, path.clone(), config)),
            Err(error) => warn!(pack = name, %error, "dropping pack: malformed .dodot.toml"),
        }
    }

    packs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(packs)
}

fn is_excluded(name: &str) -> bool {
    if name.starts_with('.') && name != ".config" {
        return true;
    }
    if IGNORED_NAMES.contains(&name) {
        return true;
    }
    IGNORED_GLOBS.iter().any(|glob| glob::Pattern::new(glob).map(|p| p.matches(name)).unwrap_or(false))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
