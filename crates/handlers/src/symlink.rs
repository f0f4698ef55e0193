// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The symlink handler: one `Action::Link` per matched file.
//!
//! The handler never resolves the system target itself. The action
//! generator injects the resolved target into `Match::metadata` under
//! `"resolved_target"` before dispatch (§9 open question on directory
//! mapping); this handler only consumes it.

use crate::state::clear_linked_state;
use dodot_core::{Action, ActionKind, ClearContext, ClearedItem, Handler, HandlerError, Match, RunMode};

pub const RESOLVED_TARGET_KEY: &str = "resolved_target";

#[derive(Debug, Default)]
pub struct SymlinkHandler;

impl SymlinkHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for SymlinkHandler {
    fn name(&self) -> &str {
        "symlink"
    }

    fn validate_options(&self) -> Result<(), HandlerError> {
        Ok(())
    }

    fn run_mode(&self) -> RunMode {
        RunMode::Linking
    }

    fn process(&self, matches: &[Match]) -> Result<Vec<Action>, HandlerError> {
        matches
            .iter()
            .map(|m| {
                let target = m.metadata.get(RESOLVED_TARGET_KEY).ok_or_else(|| HandlerError::ProcessFailed {
                    handler: self.name().to_string(),
                    reason: format!(
                        "match for '{}' carries no resolved target; the action generator must inject '{RESOLVED_TARGET_KEY}'",
                        m.pack_relative_path
                    ),
                })?;
                Ok(Action {
                    pack_name: m.pack.clone(),
                    handler_name: self.name().to_string(),
                    priority: m.priority,
                    kind: ActionKind::Link { source: m.absolute_path.clone(), target: target.into() },
                })
            })
            .collect()
    }

    fn clear(&self, context: &ClearContext) -> Result<Vec<ClearedItem>, HandlerError> {
        clear_linked_state(self.name(), context, "removed symlink")
    }
}

#[cfg(test)]
#[path = "symlink_tests.rs"]
mod tests;
