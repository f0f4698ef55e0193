// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pack and per-pack configuration (§3 "Pack", "PackConfig", §6).

use crate::options::Options;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A named directory under the dotfiles root, the unit of deployment.
///
/// Immutable once built by discovery (§3); lives for one pipeline
/// invocation.
#[derive(Debug, Clone)]
pub struct Pack {
    pub name: String,
    pub path: PathBuf,
    pub config: PackConfig,
    pub metadata: HashMap<String, String>,
}

impl Pack {
    pub fn new(name: impl Into<String>, path: PathBuf, config: PackConfig) -> Self {
        Self { name: name.into(), path, config, metadata: HashMap::new() }
    }
}

/// One `[[ignore]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IgnoreRule {
    pub path: String,
}

/// One `[[override]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideRule {
    pub path: String,
    pub handler: String,
    #[serde(default, rename = "with")]
    pub options: Options,
}

/// Raw `.dodot.toml` shape, deserialized directly (§6).
#[derive(Debug, Clone, Default, Deserialize)]
struct RawPackConfig {
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    ignore: Vec<IgnoreRule>,
    #[serde(default, rename = "override")]
    overrides: Vec<OverrideRule>,
}

/// Parsed `.dodot.toml`.
///
/// First-match-wins within each list; overrides take absolute priority
/// over default rules (§3 invariant).
#[derive(Debug, Clone, Default)]
pub struct PackConfig {
    pub disabled: bool,
    pub ignore: Vec<IgnoreRule>,
    pub overrides: Vec<OverrideRule>,
}

/// File name recognized for per-pack configuration (§6).
pub const CONFIG_FILE_NAME: &str = ".dodot.toml";

/// File whose mere presence excludes a pack from discovery entirely (§4.1).
pub const IGNORE_FILE_NAME: &str = ".dodotignore";

impl PackConfig {
    /// Load `.dodot.toml` from `pack_dir`, or return the default
    /// (unrestricted, enabled) config if the file is absent (§4.1).
    pub fn load(pack_dir: &Path) -> Result<Self, toml::de::Error> {
        let config_path = pack_dir.join(CONFIG_FILE_NAME);
        let Ok(contents) = std::fs::read_to_string(&config_path) else {
            return Ok(Self::default());
        };
        let raw: RawPackConfig = toml::from_str(&contents)?;
        Ok(Self { disabled: raw.disabled, ignore: raw.ignore, overrides: raw.overrides })
    }

    /// First-match ignore test against a pack-relative path (§4.3 step 4).
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        self.ignore.iter().any(|rule| glob_matches(&rule.path, rel_path))
    }

    /// First-match override lookup against a pack-relative path
    /// (§4.3 step 5).
    pub fn find_override(&self, rel_path: &str) -> Option<&OverrideRule> {
        self.overrides.iter().find(|rule| glob_matches(&rule.path, rel_path))
    }
}

/// Characters forbidden in a pack name (§6 "Pack name validation").
const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Validate a pack name supplied to `init`/`fill` (§6): non-empty, and
/// free of path separators and shell/filesystem metacharacters.
pub fn validate_pack_name(name: &str) -> Result<(), crate::error::DodotError> {
    if name.is_empty() {
        return Err(crate::error::DodotError::InvalidInput("pack name must not be empty".to_string()));
    }
    if name.contains(FORBIDDEN_NAME_CHARS) {
        return Err(crate::error::DodotError::InvalidInput(format!(
            "pack name '{name}' must not contain any of {FORBIDDEN_NAME_CHARS:?}"
        )));
    }
    Ok(())
}

fn glob_matches(pattern: &str, rel_path: &str) -> bool {
    // Plain equality first: most ignore/override entries are exact
    // filenames, and `glob::Pattern` would otherwise treat bracket/brace
    // characters in a literal filename as pattern syntax.
    if pattern == rel_path {
        return true;
    }
    glob::Pattern::new(pattern).map(|p| p.matches(rel_path)).unwrap_or(false)
}

#[cfg(test)]
#[path = "pack_tests.rs"]
mod tests;
