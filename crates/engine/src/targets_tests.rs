// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dodot_core::test_support::test_pack;
use std::path::Path;

#[test]
fn resolve_target_joins_home_with_the_relative_path() {
    let pack = test_pack("vim");
    let target = resolve_target(&pack, ".vimrc", Path::new("/home/user"));
    assert_eq!(target, Path::new("/home/user/.vimrc"));
}

#[test]
fn resolve_target_ignores_which_pack_produced_the_path() {
    let a = resolve_target(&test_pack("vim"), "bin", Path::new("/home/user"));
    let b = resolve_target(&test_pack("zsh"), "bin", Path::new("/home/user"));
    assert_eq!(a, b);
}
