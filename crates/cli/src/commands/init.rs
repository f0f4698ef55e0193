// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dodot init` — create a new, empty pack directory (§6).

use crate::commands::RootArgs;
use anyhow::{Context, Result};
use dodot_core::{validate_pack_name, DataPaths, DodotError};
use tracing::info;

#[derive(clap::Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub root: RootArgs,
    /// Pack to create
    pub pack_name: String,
}

pub fn run(args: InitArgs) -> Result<()> {
    validate_pack_name(&args.pack_name)?;

    let mut data = DataPaths::resolve().context("resolving dotfiles root")?;
    if let Some(root) = args.root.root {
        data.dotfiles_root = root;
    }

    let pack_dir = data.dotfiles_root.join(&args.pack_name);
    if pack_dir.exists() {
        return Err(DodotError::PackExists(args.pack_name).into());
    }

    std::fs::create_dir_all(&pack_dir)
        .map_err(|source| DodotError::FileAccess { path: pack_dir.clone(), source })?;

    info!(pack = %args.pack_name, path = %pack_dir.display(), "created pack");
    println!("created pack '{}' at {}", args.pack_name, pack_dir.display());
    Ok(())
}
