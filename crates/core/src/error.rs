// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stable error kinds shared across the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// One conflicting `pack/path` entry in a [`SymlinkConflict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingSource {
    pub pack: String,
    pub rel_path: String,
}

impl std::fmt::Display for ConflictingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.pack, self.rel_path)
    }
}

/// Two or more packs claim the same deployment target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkConflict {
    pub target: PathBuf,
    pub sources: Vec<ConflictingSource>,
}

impl std::fmt::Display for SymlinkConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sources = self.sources.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        write!(f, "conflict: {} all target {}", sources, self.target.display())
    }
}

/// Top-level error type for the dodot pipeline.
///
/// Each variant carries the structured detail an outer CLI needs to format
/// a useful message; see spec §7.
#[derive(Debug, Error)]
pub enum DodotError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("file access error at {path}: {source}")]
    FileAccess { path: PathBuf, #[source] source: std::io::Error },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("pack '{0}' is invalid")]
    PackInvalid(String),

    #[error("pack '{0}' is empty")]
    PackEmpty(String),

    #[error("cannot access pack '{pack}': {source}")]
    PackAccess { pack: String, #[source] source: std::io::Error },

    #[error("pack '{0}' not found")]
    PackNotFound(String),

    #[error("pack '{0}' already exists")]
    PackExists(String),

    #[error("failed to initialize pack '{name}': {reason}")]
    PackInit { name: String, reason: String },

    #[error("failed to parse config at {path}: {source}")]
    ConfigLoad { path: PathBuf, #[source] source: toml::de::Error },

    #[error("handler '{0}' not found")]
    HandlerNotFound(String),

    #[error("handler '{handler}' rejected its options: {reason}")]
    HandlerInvalid { handler: String, reason: String },

    #[error("handler '{handler}' failed: {reason}")]
    HandlerExecute { handler: String, reason: String },

    #[error("invalid action: {0}")]
    ActionInvalid(String),

    #[error("failed to execute action: {0}")]
    ActionExecute(String),

    #[error("permission denied: {0}")]
    Permission(String),

    #[error("target already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{0}")]
    SymlinkConflict(SymlinkConflict),

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("could not determine the current user's home directory")]
    HomeDirNotFound,
}

pub type DodotResult<T> = Result<T, DodotError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
