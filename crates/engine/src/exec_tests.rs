// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dodot_core::DodotError;
use tempfile::tempdir;

fn config(home: &Path, root: &Path, data: &Path, home_symlinks_enabled: bool, dry_run: bool) -> ExecutorConfig {
    ExecutorConfig {
        home: home.to_path_buf(),
        dotfiles_root: root.to_path_buf(),
        data_dir: data.to_path_buf(),
        home_symlinks_enabled,
        dry_run,
    }
}

#[test]
fn create_dir_and_write_file_inside_data_dir_succeed() {
    let root = tempdir().unwrap();
    let data = root.path().join("data");
    let cfg = config(&root.path().join("home"), &root.path().join("dotfiles"), &data, false, false);

    let target_dir = data.join("packs/vim/symlinks");
    let ops = vec![
        Operation::CreateDir { target: target_dir.clone(), mode: 0o755 },
        Operation::WriteFile { target: target_dir.join("marker"), content: b"hi".to_vec(), mode: 0o644 },
    ];
    execute(&ops, &cfg).unwrap();

    assert!(target_dir.join("marker").exists());
}

#[test]
fn symlink_into_home_is_rejected_without_home_symlinks_enabled() {
    let root = tempdir().unwrap();
    let home = root.path().join("home");
    let dotfiles = root.path().join("dotfiles");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&dotfiles).unwrap();
    let data = root.path().join("data");
    let cfg = config(&home, &dotfiles, &data, false, false);

    let ops = vec![Operation::CreateSymlink { source: dotfiles.join("vim/.vimrc"), target: home.join(".vimrc") }];
    let err = execute(&ops, &cfg).unwrap_err();
    assert!(matches!(err, DodotError::Permission(_)));
}

#[test]
fn symlink_into_home_from_dotfiles_root_succeeds_when_enabled() {
    let root = tempdir().unwrap();
    let home = root.path().join("home");
    let dotfiles = root.path().join("dotfiles/vim");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&dotfiles).unwrap();
    let source = dotfiles.join(".vimrc");
    std::fs::write(&source, b"\" vimrc").unwrap();
    let data = root.path().join("data");
    let cfg = config(&home, &root.path().join("dotfiles"), &data, true, false);

    let ops = vec![Operation::CreateSymlink { source: source.clone(), target: home.join(".vimrc") }];
    execute(&ops, &cfg).unwrap();

    assert_eq!(std::fs::read_link(home.join(".vimrc")).unwrap(), source);
}

#[test]
fn symlink_targeting_a_protected_file_fails_with_permission() {
    let root = tempdir().unwrap();
    let home = root.path().join("home");
    let dotfiles = root.path().join("dotfiles/ssh");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&dotfiles).unwrap();
    let source = dotfiles.join("id_rsa");
    std::fs::write(&source, b"secret").unwrap();
    let data = root.path().join("data");
    let cfg = config(&home, &root.path().join("dotfiles"), &data, true, false);

    let ops = vec![Operation::CreateSymlink { source, target: home.join(".ssh/id_rsa") }];
    let err = execute(&ops, &cfg).unwrap_err();
    match err {
        DodotError::Permission(msg) => assert!(msg.contains("protected file")),
        other => panic!("expected Permission, got {other:?}"),
    }
}

#[test]
fn symlink_source_outside_dotfiles_root_is_rejected_even_into_home() {
    let root = tempdir().unwrap();
    let home = root.path().join("home");
    let outside = root.path().join("elsewhere");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&outside).unwrap();
    let source = outside.join("file");
    std::fs::write(&source, b"x").unwrap();
    let data = root.path().join("data");
    let cfg = config(&home, &root.path().join("dotfiles"), &data, true, false);

    let ops = vec![Operation::CreateSymlink { source, target: home.join("file") }];
    let err = execute(&ops, &cfg).unwrap_err();
    assert!(matches!(err, DodotError::Permission(_)));
}

#[test]
fn create_symlink_against_an_existing_target_fails_with_already_exists() {
    let root = tempdir().unwrap();
    let data = root.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    let existing = data.join("already-here");
    std::fs::write(&existing, b"x").unwrap();
    let source = data.join("source");
    std::fs::write(&source, b"y").unwrap();

    let cfg = config(&root.path().join("home"), &root.path().join("dotfiles"), &data, false, false);
    let ops = vec![Operation::CreateSymlink { source, target: existing.clone() }];
    let err = execute(&ops, &cfg).unwrap_err();
    assert!(matches!(err, DodotError::AlreadyExists(p) if p == existing));
}

#[test]
fn dry_run_performs_no_filesystem_mutation() {
    let root = tempdir().unwrap();
    let data = root.path().join("data");
    let cfg = config(&root.path().join("home"), &root.path().join("dotfiles"), &data, false, true);

    let target = data.join("packs/vim/symlinks");
    let ops = vec![Operation::CreateDir { target: target.clone(), mode: 0o755 }];
    execute(&ops, &cfg).unwrap();

    assert!(!target.exists());
}

#[test]
fn delete_file_is_idempotent_when_already_absent() {
    let root = tempdir().unwrap();
    let data = root.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    let cfg = config(&root.path().join("home"), &root.path().join("dotfiles"), &data, false, false);

    let ops = vec![Operation::DeleteFile { target: data.join("never-existed") }];
    execute(&ops, &cfg).unwrap();
}

#[test]
fn create_dir_into_home_succeeds_when_home_symlinks_enabled() {
    // The compiler emits `CreateDir(parent(target))` ahead of every
    // `Link`; with the default basename-only target mapping that parent
    // is `home` itself, so this must be allowed whenever home-symlinks
    // are enabled, not just the `CreateSymlink` that follows it.
    let root = tempdir().unwrap();
    let home = root.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let data = root.path().join("data");
    let cfg = config(&home, &root.path().join("dotfiles"), &data, true, false);

    let ops = vec![Operation::CreateDir { target: home.clone(), mode: 0o755 }];
    execute(&ops, &cfg).unwrap();
}

#[test]
fn create_dir_into_home_is_rejected_without_home_symlinks_enabled() {
    let root = tempdir().unwrap();
    let home = root.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let data = root.path().join("data");
    let cfg = config(&home, &root.path().join("dotfiles"), &data, false, false);

    let ops = vec![Operation::CreateDir { target: home.join("nested"), mode: 0o755 }];
    let err = execute(&ops, &cfg).unwrap_err();
    assert!(matches!(err, DodotError::Permission(_)));
}

#[test]
fn run_script_with_cwd_under_dotfiles_root_is_not_confined() {
    // `RunScript`'s `cwd` is the pack directory under `dotfiles_root`,
    // never under `data_dir`; it must run regardless of the confinement
    // policy since it is an execution step, not a mutation.
    let root = tempdir().unwrap();
    let dotfiles = root.path().join("dotfiles/p");
    std::fs::create_dir_all(&dotfiles).unwrap();
    let data = root.path().join("data");
    let cfg = config(&root.path().join("home"), &root.path().join("dotfiles"), &data, false, false);

    let ops = vec![Operation::RunScript { command: "exit 0".to_string(), cwd: dotfiles, pack: "p".to_string() }];
    execute(&ops, &cfg).unwrap();
}

#[test]
fn run_script_failure_surfaces_as_action_execute() {
    let root = tempdir().unwrap();
    let data = root.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    let cfg = config(&root.path().join("home"), &root.path().join("dotfiles"), &data, false, false);

    let ops = vec![Operation::RunScript { command: "exit 7".to_string(), cwd: data.clone(), pack: "vim".to_string() }];
    let err = execute(&ops, &cfg).unwrap_err();
    match err {
        DodotError::ActionExecute(msg) => assert!(msg.contains("vim")),
        other => panic!("expected ActionExecute, got {other:?}"),
    }
}
