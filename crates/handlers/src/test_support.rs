// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for crates that depend on `dodot-handlers`.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use dodot_core::{Action, ActionKind, ClearContext, ClearedItem, Handler, HandlerError, Match, RunMode};
use std::sync::Mutex;

/// A handler that records the matches it was asked to process and returns
/// a fixed, caller-provided set of actions. Useful for exercising the
/// dispatch/grouping machinery in `dodot-engine` without depending on a
/// real handler's domain semantics.
pub struct FakeHandler {
    name: String,
    run_mode: RunMode,
    actions: Vec<Action>,
    processed: Mutex<Vec<Match>>,
    fail_validation: bool,
}

impl FakeHandler {
    pub fn new(name: impl Into<String>, run_mode: RunMode) -> Self {
        Self { name: name.into(), run_mode, actions: Vec::new(), processed: Mutex::new(Vec::new()), fail_validation: false }
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    pub fn failing_validation(mut self) -> Self {
        self.fail_validation = true;
        self
    }

    pub fn processed_matches(&self) -> Vec<Match> {
        self.processed.lock().expect("fake handler mutex poisoned").clone()
    }

    pub fn link_action(pack: &str, source: &str, target: &str) -> Action {
        Action {
            pack_name: pack.to_string(),
            handler_name: "symlink".to_string(),
            priority: 0,
            kind: ActionKind::Link { source: source.into(), target: target.into() },
        }
    }
}

impl Handler for FakeHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate_options(&self) -> Result<(), HandlerError> {
        if self.fail_validation {
            return Err(HandlerError::InvalidOptions { handler: self.name.clone(), reason: "forced failure".to_string() });
        }
        Ok(())
    }

    fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    fn process(&self, matches: &[Match]) -> Result<Vec<Action>, HandlerError> {
        self.processed.lock().expect("fake handler mutex poisoned").extend_from_slice(matches);
        Ok(self.actions.clone())
    }

    fn clear(&self, _context: &ClearContext) -> Result<Vec<ClearedItem>, HandlerError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
#[path = "test_support_tests.rs"]
mod tests;
