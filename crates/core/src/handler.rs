// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Handler` capability set (§3 "Handler", §4.4).

use crate::action::Action;
use crate::options::Options;
use crate::pack_match::Match;
use thiserror::Error;

/// Whether a handler runs on every deploy (idempotent operations) or at
/// most once per unique content (§3, §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Runs on every deploy; its operations must be idempotent.
    Linking,
    /// Runs once per unique content hash (§4.6).
    Provisioning,
}

crate::simple_display! {
    RunMode {
        Linking => "linking",
        Provisioning => "provisioning",
    }
}

/// A single cleared item reported by [`Handler::clear`] (§4.9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedItem {
    pub description: String,
    pub path: std::path::PathBuf,
}

/// Context passed to [`Handler::clear`]: enough for a handler to find and
/// remove what it deployed without re-scanning packs.
#[derive(Debug, Clone)]
pub struct ClearContext {
    pub pack: String,
    pub state_dir: std::path::PathBuf,
}

/// Errors a handler can raise validating options or processing matches
/// (§4.4, §4.5). Always carries the handler name for pipeline-level
/// context.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("handler '{handler}' rejected its options: {reason}")]
    InvalidOptions { handler: String, reason: String },
    #[error("handler '{handler}' failed to process matches: {reason}")]
    ProcessFailed { handler: String, reason: String },
}

/// Polymorphic capability set every handler implements (§3).
///
/// A handler never touches the filesystem itself — it only emits
/// [`Action`]s, keeping C5 (dispatch) and C7/C8 (compile/execute)
/// independently testable.
pub trait Handler: Send + Sync {
    /// The handler's registered name (e.g. `"symlink"`).
    fn name(&self) -> &str;

    /// Validate the handler-level options this instance was constructed
    /// with. Called once, before `process` (§4.4).
    fn validate_options(&self) -> Result<(), HandlerError>;

    /// Linking or provisioning (§3, §4.6).
    fn run_mode(&self) -> RunMode;

    /// Turn a group of matches (already filtered to this handler, this
    /// pack, this options fingerprint — §4.5 step 2) into actions.
    fn process(&self, matches: &[Match]) -> Result<Vec<Action>, HandlerError>;

    /// Reverse this handler's deployment for one pack (§4.9). Handlers
    /// that have nothing extra to clear beyond their state directory
    /// return an empty list — the state directory removal itself is done
    /// by the clear engine, not the handler.
    fn clear(&self, _context: &ClearContext) -> Result<Vec<ClearedItem>, HandlerError> {
        Ok(Vec::new())
    }
}

/// Constructs a [`Handler`] from its declared handler-options.
pub type HandlerFactory = fn(&Options) -> Result<Box<dyn Handler>, HandlerError>;

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
