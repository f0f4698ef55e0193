// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dodot_core::{IgnoreRule, OverrideRule, PackConfig};
use std::path::PathBuf;
use tempfile::tempdir;

fn default_rules() -> Vec<Rule> {
    dodot_rules::default_rules()
}

fn pack_at(dir: &std::path::Path, name: &str, config: PackConfig) -> Pack {
    Pack::new(name, dir.to_path_buf(), config)
}

#[test]
fn scan_matches_a_brewfile_and_falls_back_to_symlink_catchall() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("Brewfile"), b"brew \"vim\"").unwrap();
    std::fs::write(dir.path().join(".vimrc"), b"set nu").unwrap();

    let pack = pack_at(dir.path(), "mac", PackConfig::default());
    let matches = scan(&pack, &default_rules()).unwrap();

    let brewfile = matches.iter().find(|m| m.pack_relative_path == "Brewfile").unwrap();
    assert_eq!(brewfile.handler_name, "homebrew");

    let vimrc = matches.iter().find(|m| m.pack_relative_path == ".vimrc").unwrap();
    assert_eq!(vimrc.handler_name, "symlink");
}

#[test]
fn scan_skips_the_pack_config_file_itself() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".dodot.toml"), b"").unwrap();
    let pack = pack_at(dir.path(), "vim", PackConfig::default());
    let matches = scan(&pack, &default_rules()).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn scan_honors_ignore_rules() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".vimrc"), b"").unwrap();
    std::fs::write(dir.path().join(".vimrc.bak"), b"").unwrap();

    let config = PackConfig { ignore: vec![IgnoreRule { path: "*.bak".to_string() }], ..Default::default() };
    let pack = pack_at(dir.path(), "vim", config);
    let matches = scan(&pack, &default_rules()).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].pack_relative_path, ".vimrc");
}

#[test]
fn scan_honors_overrides_with_reserved_priority_and_skips_default_rules() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("x.sh"), b"").unwrap();

    let config = PackConfig {
        overrides: vec![OverrideRule { path: "x.sh".to_string(), handler: "install".to_string(), options: Default::default() }],
        ..Default::default()
    };
    let pack = pack_at(dir.path(), "p", config);
    let matches = scan(&pack, &default_rules()).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].handler_name, "install");
    assert_eq!(matches[0].trigger_name, OVERRIDE_TRIGGER_NAME);
    assert_eq!(matches[0].priority, OVERRIDE_PRIORITY);
}

#[test]
fn scan_returns_nothing_for_a_disabled_pack() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".vimrc"), b"").unwrap();
    let config = PackConfig { disabled: true, ..Default::default() };
    let pack = pack_at(dir.path(), "vim", config);
    assert!(scan(&pack, &default_rules()).unwrap().is_empty());
}

#[test]
fn scan_matches_a_bin_directory_with_the_path_handler() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("bin")).unwrap();
    let pack = pack_at(dir.path(), "gotools", PackConfig::default());
    let matches = scan(&pack, &default_rules()).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].handler_name, "path");
    assert_eq!(matches[0].absolute_path, PathBuf::from(dir.path().join("bin")));
}

#[test]
fn scan_is_flat_and_does_not_descend_into_pack_subdirectories() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("bin");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(sub.join("helper"), b"").unwrap();

    let pack = pack_at(dir.path(), "gotools", PackConfig::default());
    let matches = scan(&pack, &default_rules()).unwrap();

    assert!(matches.iter().all(|m| !m.pack_relative_path.contains('/')));
}
