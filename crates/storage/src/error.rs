// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage-layer error kind.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to remove {path}: {source}")]
    Remove { path: PathBuf, #[source] source: std::io::Error },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
