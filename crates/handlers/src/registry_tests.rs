// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dodot_core::Options;

#[test]
fn initialize_registers_all_built_in_handlers() {
    let registry = initialize();
    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["homebrew", "install", "path", "shell", "symlink"]);
}

#[test]
fn build_constructs_the_named_handler() {
    let registry = initialize();
    let handler = registry.build("symlink", &Options::new()).unwrap();
    assert_eq!(handler.name(), "symlink");
}

#[test]
fn build_reports_handler_not_found_for_unknown_name() {
    let registry = initialize();
    let err = registry.build("nonexistent", &Options::new()).unwrap_err();
    assert!(matches!(err, DodotError::HandlerNotFound(name) if name == "nonexistent"));
}
