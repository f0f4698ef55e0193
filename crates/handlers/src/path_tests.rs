// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dodot_core::test_support::test_match;

#[test]
fn process_emits_add_to_path_per_matched_directory() {
    let handler = PathHandler::new();
    let m = test_match("gotools", "bin", "path", 70);
    let actions = handler.process(&[m]).unwrap();
    assert_eq!(actions.len(), 1);
    match &actions[0].kind {
        ActionKind::AddToPath { dir } => assert_eq!(dir, std::path::Path::new("/dotfiles/gotools/bin")),
        other => panic!("unexpected action kind: {other:?}"),
    }
    assert_eq!(actions[0].priority, 70);
}

#[test]
fn run_mode_is_linking() {
    assert_eq!(PathHandler::new().run_mode(), RunMode::Linking);
}
