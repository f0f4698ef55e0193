// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The path handler: one `Action::AddToPath` per matched directory.

use crate::state::clear_linked_state;
use dodot_core::{Action, ActionKind, ClearContext, ClearedItem, Handler, HandlerError, Match, RunMode};

#[derive(Debug, Default)]
pub struct PathHandler;

impl PathHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for PathHandler {
    fn name(&self) -> &str {
        "path"
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
                kind: ActionKind::AddToPath { dir: m.absolute_path.clone() },
            })
            .collect())
    }

    fn clear(&self, context: &ClearContext) -> Result<Vec<ClearedItem>, HandlerError> {
        clear_linked_state(self.name(), context, "removed path entry")
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
