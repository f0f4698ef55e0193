// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dodot_core::test_support::test_match;

#[test]
fn process_emits_link_action_from_resolved_target_metadata() {
    let handler = SymlinkHandler::new();
    let mut m = test_match("vim", ".vimrc", "symlink", 0);
    m.metadata.insert(RESOLVED_TARGET_KEY.to_string(), "/home/user/.vimrc".to_string());

    let actions = handler.process(&[m]).unwrap();
    assert_eq!(actions.len(), 1);
    match &actions[0].kind {
        ActionKind::Link { source, target } => {
            assert_eq!(source, std::path::Path::new("/dotfiles/vim/.vimrc"));
            assert_eq!(target, std::path::Path::new("/home/user/.vimrc"));
        }
        other => panic!("unexpected action kind: {other:?}"),
    }
}

#[test]
fn process_fails_when_resolved_target_is_missing() {
    let handler = SymlinkHandler::new();
    let m = test_match("vim", ".vimrc", "symlink", 0);
    let err = handler.process(&[m]).unwrap_err();
    assert!(matches!(err, HandlerError::ProcessFailed { .. }));
}

#[test]
fn run_mode_is_linking() {
    assert_eq!(SymlinkHandler::new().run_mode(), RunMode::Linking);
}

#[test]
fn clear_delegates_to_shared_state_walk() {
    let handler = SymlinkHandler::new();
    let dir = tempfile::tempdir().unwrap();
    let context = ClearContext { pack: "vim".to_string(), state_dir: dir.path().join("packs/vim/symlinks") };
    assert!(handler.clear(&context).unwrap().is_empty());
}
