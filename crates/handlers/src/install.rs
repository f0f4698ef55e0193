// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The install handler: one `Action::RunScript` per matched install script.
//!
//! Provisioning handler; its sentinel lives under `<data>/install/<pack>`
//! and is managed by the engine, not by this handler.

use dodot_core::{Action, ActionKind, Handler, HandlerError, Match, RunMode};

#[derive(Debug, Default)]
pub struct InstallHandler;

impl InstallHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for InstallHandler {
    fn name(&self) -> &str {
        "install"
    }

    fn validate_options(&self) -> Result<(), HandlerError> {
        Ok(())
    }

    fn run_mode(&self) -> RunMode {
        RunMode::Provisioning
    }

    fn process(&self, matches: &[Match]) -> Result<Vec<Action>, HandlerError> {
        Ok(matches
            .iter()
            .map(|m| Action {
                pack_name: m.pack.clone(),
                handler_name: self.name().to_string(),
                priority: m.priority,
                kind: ActionKind::RunScript { script_path: m.absolute_path.clone() },
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "install_tests.rs"]
mod tests;
