// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dodot_core::{Action, HandlerError, Match};
use dodot_handlers::test_support::FakeHandler;
use dodot_storage::write_sentinel;
use dodot_core::Sentinel;
use tempfile::tempdir;

fn data_paths(root: &Path) -> DataPaths {
    DataPaths { home: root.join("home"), dotfiles_root: root.to_path_buf(), data_dir: root.join("data") }
}

struct FailingHandler(RunMode);

impl Handler for FailingHandler {
    fn name(&self) -> &str {
        "failing"
    }
    fn validate_options(&self) -> Result<(), HandlerError> {
        Ok(())
    }
    fn run_mode(&self) -> RunMode {
        self.0
    }
    fn process(&self, _matches: &[Match]) -> Result<Vec<Action>, HandlerError> {
        Ok(Vec::new())
    }
    fn clear(&self, _context: &ClearContext) -> Result<Vec<ClearedItem>, HandlerError> {
        Err(HandlerError::ProcessFailed { handler: "failing".to_string(), reason: "boom".to_string() })
    }
}

#[test]
fn clearing_a_linking_handler_removes_its_state_directory() {
    let root = tempdir().unwrap();
    let data = data_paths(root.path());
    let state_dir = data.pack_state_dir("vim", "symlink");
    std::fs::create_dir_all(&state_dir).unwrap();
    std::fs::write(state_dir.join("vimrc"), b"x").unwrap();

    let handler = FakeHandler::new("symlink", RunMode::Linking);
    let report = clear_pack("vim", &[("symlink", &handler)], &data).unwrap();

    assert!(report.state_removed);
    assert!(!state_dir.exists());
}

#[test]
fn clearing_a_linking_handler_tolerates_a_missing_state_directory() {
    let root = tempdir().unwrap();
    let data = data_paths(root.path());
    let handler = FakeHandler::new("symlink", RunMode::Linking);

    let report = clear_pack("vim", &[("symlink", &handler)], &data).unwrap();
    assert!(report.state_removed);
}

#[test]
fn clearing_a_provisioning_handler_deletes_its_sentinel() {
    let root = tempdir().unwrap();
    let data = data_paths(root.path());
    let sentinel_dir = data.sentinel_dir("install");
    write_sentinel(&sentinel_dir, &Sentinel::new("tmux", "install", "deadbeef")).unwrap();

    let handler = FakeHandler::new("install", RunMode::Provisioning);
    let report = clear_pack("tmux", &[("install", &handler)], &data).unwrap();

    assert!(report.state_removed);
    assert!(dodot_storage::read_sentinel(&sentinel_dir, "tmux").unwrap().is_none());
}

#[test]
fn clear_pack_attempts_every_handler_even_after_one_fails() {
    let root = tempdir().unwrap();
    let data = data_paths(root.path());
    let ok_handler = FakeHandler::new("symlink", RunMode::Linking);
    let state_dir = data.pack_state_dir("vim", "symlink");
    std::fs::create_dir_all(&state_dir).unwrap();

    let failing = FailingHandler(RunMode::Linking);
    let err = clear_pack("vim", &[("failing", &failing), ("symlink", &ok_handler)], &data).unwrap_err();

    assert!(matches!(err, DodotError::HandlerExecute { .. }));
    assert!(!state_dir.exists(), "later handlers still run after an earlier failure");
}
