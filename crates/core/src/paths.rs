// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of the dotfiles root and the two distinct state areas under
//! the data directory (§3 "State directory", §6).

use std::env;
use std::path::PathBuf;

/// Environment variable overriding where dotfiles packs live.
pub const DOTFILES_ROOT_VAR: &str = "DOTFILES_ROOT";

/// Environment variable overriding where dodot keeps its own state
/// (symlinked sources, sentinels).
pub const DATA_DIR_VAR: &str = "DODOT_DATA_DIR";

/// The three paths every pipeline invocation resolves once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// The current user's home directory, per `dirs::home_dir()`.
    pub home: PathBuf,
    /// Directory containing packs (default `~/dotfiles`).
    pub dotfiles_root: PathBuf,
    /// Directory holding dodot's own state (default XDG data dir, e.g.
    /// `~/.local/share/dodot`).
    pub data_dir: PathBuf,
}

impl DataPaths {
    /// Resolve from the environment, falling back to platform defaults
    /// (§6). Errors if `$HOME` (or the platform equivalent) cannot be
    /// determined at all.
    pub fn resolve() -> Result<Self, crate::error::DodotError> {
        let home = dirs::home_dir().ok_or(crate::error::DodotError::HomeDirNotFound)?;

        let dotfiles_root = env::var_os(DOTFILES_ROOT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join("dotfiles"));

        let data_dir = env::var_os(DATA_DIR_VAR).map(PathBuf::from).unwrap_or_else(|| {
            dirs::data_dir().unwrap_or_else(|| home.join(".local/share")).join("dodot")
        });

        Ok(Self { home, dotfiles_root, data_dir })
    }

    /// Per-pack, per-handler deployed-state directory for a *linking*
    /// handler: `<data>/packs/<pack>/<stateDirOf(handler)>` (§3 "State
    /// directory", §4.4, §4.9). Not used for provisioning handlers — see
    /// [`Self::sentinel_dir`].
    pub fn pack_state_dir(&self, pack: &str, handler_name: &str) -> PathBuf {
        self.data_dir.join("packs").join(pack).join(state_dir_name(handler_name))
    }

    /// Top-level sentinel directory for a *provisioning* handler, e.g.
    /// `<data>/install` or `<data>/brewfile` (§3 "Sentinel", §6). The
    /// sentinel file for a given pack lives at `sentinel_dir(handler).join(pack)`.
    pub fn sentinel_dir(&self, handler_name: &str) -> PathBuf {
        self.data_dir.join(sentinel_dir_name(handler_name))
    }
}

/// Maps a *linking* handler's registered name to the directory name its
/// per-pack deployed state lives under (§4.4's state-dir table).
fn state_dir_name(handler_name: &str) -> &'static str {
    match handler_name {
        "symlink" => "symlinks",
        "path" => "path",
        "shell" => "shell",
        _ => "misc",
    }
}

/// Maps a *provisioning* handler's registered name to its sentinel
/// directory. `homebrew`'s sentinels live under `brewfile/`, a historical
/// name carried over from §6's filesystem layout rather than the handler
/// name itself.
fn sentinel_dir_name(handler_name: &str) -> &'static str {
    match handler_name {
        "homebrew" => "brewfile",
        "install" => "install",
        _ => "misc",
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
