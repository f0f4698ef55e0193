// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The clear engine (C9, §4.9): reverse a pack's deployment, handler by
//! handler.

use dodot_core::{ClearContext, ClearedItem, DataPaths, DodotError, Handler, RunMode};
use dodot_storage::{delete_sentinel, remove_pack_state_dir};

/// Outcome of clearing one pack against one handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub cleared_items: Vec<ClearedItem>,
    pub state_removed: bool,
}

/// Clear `pack` for every handler in `handlers`, in order, tolerating
/// handlers and packs that never deployed anything. Every handler is
/// attempted even after an earlier one fails; the first error encountered
/// is returned once all handlers have been tried (§4.9).
pub fn clear_pack(pack: &str, handlers: &[(&str, &dyn Handler)], data: &DataPaths) -> Result<ClearReport, DodotError> {
    let mut report = ClearReport::default();
    let mut first_error = None;

    for (handler_name, handler) in handlers {
        match clear_one(pack, handler_name, *handler, data) {
            Ok(mut one) => {
                report.cleared_items.append(&mut one.cleared_items);
                report.state_removed = report.state_removed || one.state_removed;
            }
            Err(error) if first_error.is_none() => first_error = Some(error),
            Err(_) => {}
        }
    }

    match first_error {
        Some(error) => Err(error),
        None => Ok(report),
    }
}

fn clear_one(pack: &str, handler_name: &str, handler: &dyn Handler, data: &DataPaths) -> Result<ClearReport, DodotError> {
    let mut report = ClearReport::default();

    match handler.run_mode() {
        RunMode::Linking => {
            let state_dir = data.pack_state_dir(pack, handler_name);
            let context = ClearContext { pack: pack.to_string(), state_dir: state_dir.clone() };
            report.cleared_items = handler
                .clear(&context)
                .map_err(|source| DodotError::HandlerExecute { handler: handler_name.to_string(), reason: source.to_string() })?;

            remove_pack_state_dir(&state_dir).map_err(|error| DodotError::ActionExecute(error.to_string()))?;
            report.state_removed = true;
        }
        RunMode::Provisioning => {
            let state_dir = data.sentinel_dir(handler_name);
            let context = ClearContext { pack: pack.to_string(), state_dir: state_dir.clone() };
            report.cleared_items = handler
                .clear(&context)
                .map_err(|source| DodotError::HandlerExecute { handler: handler_name.to_string(), reason: source.to_string() })?;

            delete_sentinel(&state_dir, pack).map_err(|error| DodotError::ActionExecute(error.to_string()))?;
            report.state_removed = true;
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "clear_tests.rs"]
mod tests;
