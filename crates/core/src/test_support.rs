// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::action::{Action, ActionKind};
use crate::options::Options;
use crate::pack::{Pack, PackConfig};
use crate::pack_match::Match;
use crate::rule::Rule;
use crate::trigger::FileInfo;
use std::collections::BTreeMap;
use std::path::PathBuf;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core domain types.
pub mod strategies {
    use proptest::prelude::*;

    pub fn arb_priority() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    pub fn arb_rel_path() -> impl Strategy<Value = String> {
        "[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.[a-z]{1,4}"
    }
}

// ── Domain object factories ──────────────────────────────────────────────

pub fn test_pack(name: &str) -> Pack {
    Pack::new(name, PathBuf::from(format!("/dotfiles/{name}")), PackConfig::default())
}

pub fn test_file_info(is_dir: bool) -> FileInfo {
    FileInfo { is_dir, is_symlink: false }
}

pub fn test_rule(name: &str, trigger_name: &str, handler_name: &str, priority: i64) -> Rule {
    Rule::new(name, trigger_name, handler_name, priority)
}

pub fn test_match(pack: &str, rel_path: &str, handler_name: &str, priority: i64) -> Match {
    Match {
        trigger_name: "glob".to_string(),
        pack: pack.to_string(),
        pack_relative_path: rel_path.to_string(),
        absolute_path: PathBuf::from(format!("/dotfiles/{pack}/{rel_path}")),
        metadata: BTreeMap::new(),
        handler_name: handler_name.to_string(),
        handler_options: Options::new(),
        priority,
    }
}

pub fn test_link_action(pack: &str, source: &str, target: &str) -> Action {
    Action {
        pack_name: pack.to_string(),
        handler_name: "symlink".to_string(),
        priority: 0,
        kind: ActionKind::Link { source: PathBuf::from(source), target: PathBuf::from(target) },
    }
}
