// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn remove_pack_state_dir_is_idempotent_when_absent() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("packs/vim/symlinks");
    assert!(remove_pack_state_dir(&missing).is_ok());
}

#[test]
fn remove_pack_state_dir_deletes_existing_contents() {
    let dir = tempdir().unwrap();
    let state_dir = dir.path().join("packs/vim/symlinks");
    std::fs::create_dir_all(&state_dir).unwrap();
    std::fs::write(state_dir.join("vimrc"), b"marker").unwrap();
    remove_pack_state_dir(&state_dir).unwrap();
    assert!(!state_dir.exists());
}
