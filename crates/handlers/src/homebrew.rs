// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The homebrew handler: one `Action::Brew` per pack's `Brewfile`.
//!
//! Provisioning handler; its sentinel lives under the data directory's
//! `brewfile` area (§6) and is managed by the engine, not by this handler.

use dodot_core::{Action, ActionKind, Handler, HandlerError, Match, RunMode};

#[derive(Debug, Default)]
pub struct HomebrewHandler;

impl HomebrewHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for HomebrewHandler {
    fn name(&self) -> &str {
        "homebrew"
    }

    fn validate_options(&self) -> Result<(), HandlerError> {
        Ok(())
    }

    fn run_mode(&self) -> RunMode {
        RunMode::Provisioning
    }

    fn process(&self, matches: &[Match]) -> Result<Vec<Action>, HandlerError> {
        if matches.len() > 1 {
            return Err(HandlerError::ProcessFailed {
                handler: self.name().to_string(),
                reason: format!(
                    "pack '{}' has {} Brewfile matches; a pack may declare at most one",
                    matches[0].pack,
                    matches.len()
                ),
            });
        }
        Ok(matches
            .iter()
            .map(|m| Action {
                pack_name: m.pack.clone(),
                handler_name: self.name().to_string(),
                priority: m.priority,
                kind: ActionKind::Brew { brewfile_path: m.absolute_path.clone() },
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "homebrew_tests.rs"]
mod tests;
