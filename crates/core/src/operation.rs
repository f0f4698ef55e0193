// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Primitive filesystem effects lowered by the action compiler (§3, §4.7).

use std::path::{Path, PathBuf};

/// A primitive, executable filesystem effect.
///
/// `ReadFile`/`Checksum` are non-mutating placeholders consumed internally
/// by the compiler/run-once filter and never reach the executor (§3).
/// `RunScript` is the concrete shape of a provisioning handler's logical
/// execution step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateDir { target: PathBuf, mode: u32 },
    WriteFile { target: PathBuf, content: Vec<u8>, mode: u32 },
    CreateSymlink { source: PathBuf, target: PathBuf },
    CopyFile { source: PathBuf, target: PathBuf },
    DeleteFile { target: PathBuf },
    BackupFile { source: PathBuf, target: PathBuf },
    RunScript { command: String, cwd: PathBuf, pack: String },
}

impl Operation {
    /// Short, stable tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::CreateDir { .. } => "create_dir",
            Operation::WriteFile { .. } => "write_file",
            Operation::CreateSymlink { .. } => "create_symlink",
            Operation::CopyFile { .. } => "copy_file",
            Operation::DeleteFile { .. } => "delete_file",
            Operation::BackupFile { .. } => "backup_file",
            Operation::RunScript { .. } => "run_script",
        }
    }

    /// The path this operation mutates (or, for `RunScript`, the working
    /// directory it runs in). `RunScript` is exempt from the confinement
    /// check (§4.8) since it isn't itself a filesystem mutation; every
    /// other variant's target is checked against it.
    pub fn target(&self) -> &Path {
        match self {
            Operation::CreateDir { target, .. } => target,
            Operation::WriteFile { target, .. } => target,
            Operation::CreateSymlink { target, .. } => target,
            Operation::CopyFile { target, .. } => target,
            Operation::DeleteFile { target } => target,
            Operation::BackupFile { target, .. } => target,
            Operation::RunScript { cwd, .. } => cwd,
        }
    }

    /// Human-readable one-line description, used by dry-run logging (§4.8).
    pub fn describe(&self) -> String {
        match self {
            Operation::CreateDir { target, .. } => format!("create directory {}", target.display()),
            Operation::WriteFile { target, content, .. } => {
                format!("write {} bytes to {}", content.len(), target.display())
            }
            Operation::CreateSymlink { source, target } => {
                format!("symlink {} -> {}", target.display(), source.display())
            }
            Operation::CopyFile { source, target } => {
                format!("copy {} -> {}", source.display(), target.display())
            }
            Operation::DeleteFile { target } => format!("delete {}", target.display()),
            Operation::BackupFile { source, target } => {
                format!("backup {} -> {}", source.display(), target.display())
            }
            Operation::RunScript { command, cwd, .. } => {
                format!("run `{}` in {}", command, cwd.display())
            }
        }
    }
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
