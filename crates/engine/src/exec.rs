// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The safe executor (C8, §4.8): confinement-checked, fail-fast
//! application of compiled operations.

use dodot_core::{DodotError, Operation};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

const PROTECTED_PATTERNS: &[&str] = &[
    ".ssh/authorized_keys",
    ".ssh/id_*",
    ".gnupg/**",
    ".password-store/**",
    ".config/gh/hosts.yml",
    ".aws/credentials",
    ".kube/config",
    ".docker/config.json",
];

/// Confinement policy inputs for one executor run (§4.8).
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub home: PathBuf,
    pub dotfiles_root: PathBuf,
    pub data_dir: PathBuf,
    /// Per-invocation flag: whether `CreateSymlink` into `home` is allowed
    /// at all (always subject to the protected-path deny-list).
    pub home_symlinks_enabled: bool,
    pub dry_run: bool,
}

/// Apply `operations` in order, checking confinement before every mutation.
/// Stops at the first `Permission`, `AlreadyExists`, or `FileAccess` error;
/// operations already applied remain committed (§5, §7).
pub fn execute(operations: &[Operation], config: &ExecutorConfig) -> Result<(), DodotError> {
    for op in operations {
        check_confinement(op, config)?;

        if config.dry_run {
            info!(kind = op.kind(), target = %op.target().display(), "{}", op.describe());
            continue;
        }
        apply(op)?;
    }
    Ok(())
}

fn check_confinement(op: &Operation, config: &ExecutorConfig) -> Result<(), DodotError> {
    // A logical execution step, not a filesystem mutation; its `cwd` (the
    // pack directory) is never itself written to, so it is not subject to
    // the mutation-target containment policy.
    if matches!(op, Operation::RunScript { .. }) {
        return Ok(());
    }

    let target = normalize_lexical(op.target());
    if is_within(&target, &normalize_lexical(&config.data_dir)) {
        return Ok(());
    }

    let home = normalize_lexical(&config.home);

    if let Operation::CreateSymlink { source, .. } = op {
        let root = normalize_lexical(&config.dotfiles_root);
        if config.home_symlinks_enabled && is_within(&target, &home) && is_within(&normalize_lexical(source), &root) {
            if is_protected(&target, &home) {
                return Err(DodotError::Permission(format!(
                    "refusing to symlink over protected file {}",
                    target.display()
                )));
            }
            return Ok(());
        }
    }

    // `CreateDir` only ever prepares a parent directory for a home-targeted
    // symlink (§4.7); allow it anywhere under home on the same basis that
    // the symlink itself would be allowed, without the protected-path
    // check (creating a directory doesn't overwrite anything).
    if let Operation::CreateDir { .. } = op {
        if config.home_symlinks_enabled && is_within(&target, &home) {
            return Ok(());
        }
    }

    Err(DodotError::Permission(format!(
        "operation target {} is outside the allowed directories",
        target.display()
    )))
}

fn apply(op: &Operation) -> Result<(), DodotError> {
    match op {
        Operation::CreateDir { target, mode } => {
            std::fs::create_dir_all(target).map_err(|source| file_access(target, source))?;
            set_mode(target, *mode)
        }
        Operation::WriteFile { target, content, mode } => {
            std::fs::write(target, content).map_err(|source| file_access(target, source))?;
            set_mode(target, *mode)
        }
        Operation::CreateSymlink { source, target } => {
            if std::fs::symlink_metadata(target).is_ok() {
                return Err(DodotError::AlreadyExists(target.clone()));
            }
            std::os::unix::fs::symlink(source, target).map_err(|source_err| file_access(target, source_err))
        }
        Operation::CopyFile { source, target } => {
            std::fs::copy(source, target).map(|_| ()).map_err(|source_err| file_access(target, source_err))
        }
        Operation::DeleteFile { target } => match std::fs::remove_file(target) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(file_access(target, source)),
        },
        Operation::BackupFile { source, target } => {
            std::fs::rename(source, target).map_err(|source_err| file_access(target, source_err))
        }
        Operation::RunScript { command, cwd, pack } => run_script(command, cwd, pack),
    }
}

fn run_script(command: &str, cwd: &Path, pack: &str) -> Result<(), DodotError> {
    let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
    let status = Command::new(shell)
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .status()
        .map_err(|source| DodotError::ActionExecute(format!("pack '{pack}': spawning `{command}`: {source}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(DodotError::ActionExecute(format!("pack '{pack}': `{command}` exited with {status}")))
    }
}

fn set_mode(path: &Path, mode: u32) -> Result<(), DodotError> {
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).map_err(|source| file_access(path, source))
}

fn file_access(path: &Path, source: std::io::Error) -> DodotError {
    DodotError::FileAccess { path: path.to_path_buf(), source }
}

fn is_protected(target: &Path, home: &Path) -> bool {
    let Ok(rel) = target.strip_prefix(home) else { return false };
    let rel = rel.to_string_lossy();
    PROTECTED_PATTERNS.iter().any(|pattern| glob::Pattern::new(pattern).map(|p| p.matches(&rel)).unwrap_or(false))
}

fn is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}

fn normalize_lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            std::path::Component::ParentDir => {
                out.pop();
            }
            std::path::Component::CurDir => {}
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
