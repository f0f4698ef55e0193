// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Glues the core pipeline stages (discovery → scan → action generation)
//! together for the `deploy`/`install`/`status` commands. Contains no
//! pipeline logic of its own — it only threads data between the
//! `dodot-engine`/`dodot-handlers` entry points the commands need.

use anyhow::{bail, Context, Result};
use dodot_core::{Action, DataPaths, Options, Pack, RunMode};
use dodot_engine::ExecutorConfig;
use dodot_handlers::HandlerRegistry;
use std::path::PathBuf;

pub struct Pipeline {
    pub data: DataPaths,
    pub packs: Vec<Pack>,
    pub registry: HandlerRegistry,
}

impl Pipeline {
    /// Resolve the dotfiles root/data dir, discover packs, and narrow to
    /// `pack_names` when non-empty. An unknown pack name is a hard error
    /// (§6's `pack-names?` option never silently ignores a typo).
    pub fn load(root_override: Option<PathBuf>, pack_names: &[String]) -> Result<Self> {
        let mut data = DataPaths::resolve().context("resolving dotfiles root / data directory")?;
        if let Some(root) = root_override {
            data.dotfiles_root = root;
        }

        let mut packs = dodot_engine::discover(&data.dotfiles_root)
            .with_context(|| format!("discovering packs under {}", data.dotfiles_root.display()))?;

        if !pack_names.is_empty() {
            for name in pack_names {
                if !packs.iter().any(|p| &p.name == name) {
                    bail!("pack '{name}' not found under {}", data.dotfiles_root.display());
                }
            }
            packs.retain(|p| pack_names.iter().any(|n| n == &p.name));
        }

        let registry = dodot_handlers::initialize();
        Ok(Self { data, packs, registry })
    }

    /// Scan every selected pack (C3) and generate the full action list
    /// (C5), including the cross-pack symlink conflict check.
    pub fn actions(&self) -> Result<Vec<Action>> {
        let rules = dodot_rules::default_rules();
        let mut matches = Vec::new();
        for pack in &self.packs {
            matches.extend(
                dodot_engine::scan(pack, &rules).with_context(|| format!("scanning pack '{}'", pack.name))?,
            );
        }
        let actions = dodot_engine::generate_actions(&matches, &self.packs, &self.registry, &self.data.home)
            .context("generating actions")?;
        Ok(actions)
    }

    /// Split `actions` into (provisioning, linking) by their handler's
    /// declared run mode (§4.6, §6 "install ... runs provisioning then
    /// linking").
    pub fn partition_by_run_mode(&self, actions: Vec<Action>) -> Result<(Vec<Action>, Vec<Action>)> {
        let mut provisioning = Vec::new();
        let mut linking = Vec::new();
        for action in actions {
            let handler = self.registry.build(&action.handler_name, &Options::default())?;
            match handler.run_mode() {
                RunMode::Provisioning => provisioning.push(action),
                RunMode::Linking => linking.push(action),
            }
        }
        Ok((provisioning, linking))
    }

    pub fn executor_config(&self, dry_run: bool, home_symlinks_enabled: bool) -> ExecutorConfig {
        ExecutorConfig {
            home: self.data.home.clone(),
            dotfiles_root: self.data.dotfiles_root.clone(),
            data_dir: self.data.data_dir.clone(),
            home_symlinks_enabled,
            dry_run,
        }
    }
}
