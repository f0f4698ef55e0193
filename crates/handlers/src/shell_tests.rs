// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dodot_core::test_support::test_match;

#[test]
fn process_emits_add_to_shell_profile_per_match() {
    let handler = ShellHandler::new();
    let m = test_match("zsh", "aliases.sh", "shell", 80);
    let actions = handler.process(&[m]).unwrap();
    assert_eq!(actions.len(), 1);
    match &actions[0].kind {
        ActionKind::AddToShellProfile { script } => {
            assert_eq!(script, std::path::Path::new("/dotfiles/zsh/aliases.sh"))
        }
        other => panic!("unexpected action kind: {other:?}"),
    }
}

#[test]
fn run_mode_is_linking() {
    assert_eq!(ShellHandler::new().run_mode(), RunMode::Linking);
}
