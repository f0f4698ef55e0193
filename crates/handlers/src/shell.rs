// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shell handler: one `Action::AddToShellProfile` per matched file.

use crate::state::clear_linked_state;
use dodot_core::{Action, ActionKind, ClearContext, ClearedItem, Handler, HandlerError, Match, RunMode};

#[derive(Debug, Default)]
pub struct ShellHandler;

impl ShellHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for ShellHandler {
    fn name(&self) -> &str {
        "shell"
    }

    fn validate_options(&self) -> Result<(), HandlerError> {
        Ok(())
    }

    fn run_mode(&self) -> RunMode {
        RunMode::Linking
    }

    fn process(&self, matches: &[Match]) -> Result<Vec<Action>, HandlerError> {
        Ok(matches
            .iter()
            .map(|m| Action {
                pack_name: m.pack.clone(),
                handler_name: self.name().to_string(),
                priority: m.priority,
                kind: ActionKind::AddToShellProfile { script: m.absolute_path.clone() },
            })
            .collect())
    }

    fn clear(&self, context: &ClearContext) -> Result<Vec<ClearedItem>, HandlerError> {
        clear_linked_state(self.name(), context, "removed shell profile entry")
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
