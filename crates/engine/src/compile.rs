// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The action compiler (C7, §4.7): lower actions into an ordered,
//! deduplicated list of primitive operations.

use dodot_core::{content_hash, Action, ActionKind, DataPaths, DodotError, Operation, Pack};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

/// Turn a flat action list into operations, inserting a `RecordProvisioning`
/// companion after every kept provisioning action and coalescing
/// `CreateDir` by target path (§4.6, §4.7).
pub fn compile(actions: &[Action], packs: &[Pack], data: &DataPaths) -> Result<Vec<Operation>, DodotError> {
    let packs_by_name: HashMap<&str, &Pack> = packs.iter().map(|p| (p.name.as_str(), p)).collect();
    let augmented = inject_record_provisioning(actions)?;

    let mut operations = Vec::new();
    let mut seen_dirs: HashSet<PathBuf> = HashSet::new();

    for action in &augmented {
        lower(action, &packs_by_name, data, &mut operations, &mut seen_dirs);
    }
    Ok(operations)
}

fn inject_record_provisioning(actions: &[Action]) -> Result<Vec<Action>, DodotError> {
    let mut augmented = Vec::with_capacity(actions.len());
    for action in actions {
        augmented.push(action.clone());
        if let Some((handler, source)) = provisioning_source(action) {
            let bytes = std::fs::read(source).map_err(|err| DodotError::FileAccess { path: source.to_path_buf(), source: err })?;
            augmented.push(Action {
                pack_name: action.pack_name.clone(),
                handler_name: action.handler_name.clone(),
                priority: action.priority,
                kind: ActionKind::RecordProvisioning { handler: handler.to_string(), content_hash: content_hash(&bytes) },
            });
        }
    }
    Ok(augmented)
}

fn provisioning_source(action: &Action) -> Option<(&'static str, &Path)> {
    match &action.kind {
        ActionKind::Brew { brewfile_path } => Some(("homebrew", brewfile_path.as_path())),
        ActionKind::RunScript { script_path } => Some(("install", script_path.as_path())),
        _ => None,
    }
}

fn lower(
    action: &Action,
    packs_by_name: &HashMap<&str, &Pack>,
    data: &DataPaths,
    operations: &mut Vec<Operation>,
    seen_dirs: &mut HashSet<PathBuf>,
) {
    match &action.kind {
        ActionKind::Link { source, target } => {
            if let Some(parent) = target.parent() {
                create_dir(parent.to_path_buf(), operations, seen_dirs);
            }
            operations.push(Operation::CreateSymlink { source: source.clone(), target: target.clone() });
            bookmark(data, &action.pack_name, "symlink", basename(source), target.clone(), operations, seen_dirs);
        }
        ActionKind::AddToPath { dir } => {
            let deployed = data.data_dir.join("deployed/path").join(format!("{}-{}", action.pack_name, basename(dir)));
            if let Some(parent) = deployed.parent() {
                create_dir(parent.to_path_buf(), operations, seen_dirs);
            }
            operations.push(Operation::CreateSymlink { source: dir.clone(), target: deployed.clone() });
            bookmark(data, &action.pack_name, "path", basename(dir), deployed, operations, seen_dirs);
        }
        ActionKind::AddToShellProfile { script } => {
            let deployed = data.data_dir.join("deployed/shell_profile").join(format!("{}.sh", action.pack_name));
            if let Some(parent) = deployed.parent() {
                create_dir(parent.to_path_buf(), operations, seen_dirs);
            }
            operations.push(Operation::CreateSymlink { source: script.clone(), target: deployed.clone() });
            bookmark(data, &action.pack_name, "shell", format!("{}.sh", action.pack_name), deployed, operations, seen_dirs);
        }
        ActionKind::RunScript { script_path } => {
            let cwd = pack_dir(packs_by_name, &action.pack_name, script_path);
            operations.push(Operation::RunScript {
                command: script_path.display().to_string(),
                cwd,
                pack: action.pack_name.clone(),
            });
        }
        ActionKind::Brew { brewfile_path } => {
            let cwd = pack_dir(packs_by_name, &action.pack_name, brewfile_path);
            operations.push(Operation::RunScript {
                command: format!("brew bundle --file {}", brewfile_path.display()),
                cwd,
                pack: action.pack_name.clone(),
            });
        }
        ActionKind::RecordProvisioning { handler, content_hash } => {
            let sentinel_dir = data.sentinel_dir(handler);
            create_dir(sentinel_dir.clone(), operations, seen_dirs);
            operations.push(Operation::WriteFile {
                target: sentinel_dir.join(&action.pack_name),
                content: content_hash.clone().into_bytes(),
                mode: FILE_MODE,
            });
        }
    }
}

fn create_dir(target: PathBuf, operations: &mut Vec<Operation>, seen_dirs: &mut HashSet<PathBuf>) {
    if seen_dirs.insert(target.clone()) {
        operations.push(Operation::CreateDir { target, mode: DIR_MODE });
    }
}

fn bookmark(
    data: &DataPaths,
    pack: &str,
    handler_name: &str,
    name: String,
    points_at: PathBuf,
    operations: &mut Vec<Operation>,
    seen_dirs: &mut HashSet<PathBuf>,
) {
    let state_dir = data.pack_state_dir(pack, handler_name);
    create_dir(state_dir.clone(), operations, seen_dirs);
    operations.push(Operation::CreateSymlink { source: points_at, target: state_dir.join(name) });
}

fn basename(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

fn pack_dir(packs_by_name: &HashMap<&str, &Pack>, pack_name: &str, source_file: &Path) -> PathBuf {
    packs_by_name
        .get(pack_name)
        .map(|p| p.path.clone())
        .unwrap_or_else(|| source_file.parent().map(Path::to_path_buf).unwrap_or_default())
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
