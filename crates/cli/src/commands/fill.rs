// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dodot fill` — seed a pack from a handler's template, where a handler
//! provides one. None of the built-in handlers do, so this is currently
//! always a no-op that reports as much (§6, pack templating is out of
//! scope).

use crate::commands::RootArgs;
use anyhow::{bail, Context, Result};
use dodot_core::{validate_pack_name, DataPaths};

#[derive(clap::Args)]
pub struct FillArgs {
    #[command(flatten)]
    pub root: RootArgs,
    /// Pack to fill
    pub pack_name: String,
}

pub fn run(args: FillArgs) -> Result<()> {
    validate_pack_name(&args.pack_name)?;

    let mut data = DataPaths::resolve().context("resolving dotfiles root")?;
    if let Some(root) = args.root.root {
        data.dotfiles_root = root;
    }

    let pack_dir = data.dotfiles_root.join(&args.pack_name);
    if !pack_dir.is_dir() {
        bail!("pack '{}' not found under {}", args.pack_name, data.dotfiles_root.display());
    }

    println!("no template available for pack '{}'", args.pack_name);
    Ok(())
}
