// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dodot install` — run provisioning handlers (install scripts, Homebrew),
//! recording sentinels, then deploy (§6).

use crate::commands::RootArgs;
use crate::pipeline::Pipeline;
use anyhow::Result;
use tracing::info;

#[derive(clap::Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub root: RootArgs,
    /// Restrict installation to these packs
    pub packs: Vec<String>,
    /// Print the operations that would run without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
    /// Skip creating symlinks directly under the home directory
    #[arg(long)]
    pub no_home_symlinks: bool,
    /// Re-run provisioning even if its sentinel is already up to date
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InstallArgs) -> Result<()> {
    let pipeline = Pipeline::load(args.root.root, &args.packs)?;
    let actions = pipeline.actions()?;
    let (provisioning, linking) = pipeline.partition_by_run_mode(actions)?;

    let provisioning = dodot_engine::filter_run_once(provisioning, &pipeline.data, args.force)?;
    let config = pipeline.executor_config(args.dry_run, !args.no_home_symlinks);

    let provisioning_ops = dodot_engine::compile(&provisioning, &pipeline.packs, &pipeline.data)?;
    dodot_engine::execute(&provisioning_ops, &config)?;

    let linking_ops = dodot_engine::compile(&linking, &pipeline.packs, &pipeline.data)?;
    dodot_engine::execute(&linking_ops, &config)?;

    info!(
        packs = pipeline.packs.len(),
        provisioning = provisioning_ops.len(),
        linking = linking_ops.len(),
        "install complete"
    );
    Ok(())
}
