// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The handler registry (C4, §9 "Plugin registration").
//!
//! The source populates its registries via module-import side effects;
//! here registration is an explicit, deterministic `Initialize` call, so
//! tests can build a registry without relying on load order.

use crate::homebrew::HomebrewHandler;
use crate::install::InstallHandler;
use crate::path::PathHandler;
use crate::shell::ShellHandler;
use crate::symlink::SymlinkHandler;
use dodot_core::{DodotError, Handler, HandlerFactory, Options};
use std::collections::BTreeMap;

/// Read-only, name-keyed set of handler factories, built once per run.
#[derive(Default)]
pub struct HandlerRegistry {
    factories: BTreeMap<String, HandlerFactory>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, factory: HandlerFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn build(&self, name: &str, options: &Options) -> Result<Box<dyn Handler>, DodotError> {
        let factory = self.factories.get(name).ok_or_else(|| DodotError::HandlerNotFound(name.to_string()))?;
        factory(options).map_err(|source| DodotError::HandlerInvalid {
            handler: name.to_string(),
            reason: source.to_string(),
        })
    }
}

/// Build the registry of built-in handlers (symlink, path, shell,
/// homebrew, install). The engine calls this once per run and treats the
/// result as read-only thereafter.
pub fn initialize() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register("symlink", |_opts| Ok(Box::new(SymlinkHandler::new())));
    registry.register("path", |_opts| Ok(Box::new(PathHandler::new())));
    registry.register("shell", |_opts| Ok(Box::new(ShellHandler::new())));
    registry.register("homebrew", |_opts| Ok(Box::new(HomebrewHandler::new())));
    registry.register("install", |_opts| Ok(Box::new(InstallHandler::new())));
    registry
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
