// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dodot deploy` — compile and apply every linking handler's actions
//! (symlinks, PATH entries, shell profile hooks); never touches
//! provisioning handlers (§6).

use crate::commands::RootArgs;
use crate::pipeline::Pipeline;
use anyhow::Result;
use tracing::info;

#[derive(clap::Args)]
pub struct DeployArgs {
    #[command(flatten)]
    pub root: RootArgs,
    /// Restrict deployment to these packs
    pub packs: Vec<String>,
    /// Print the operations that would run without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
    /// Skip creating symlinks directly under the home directory
    #[arg(long)]
    pub no_home_symlinks: bool,
}

pub fn run(args: DeployArgs) -> Result<()> {
    let pipeline = Pipeline::load(args.root.root, &args.packs)?;
    let actions = pipeline.actions()?;
    let (_, linking) = pipeline.partition_by_run_mode(actions)?;

    let operations = dodot_engine::compile(&linking, &pipeline.packs, &pipeline.data)?;
    let config = pipeline.executor_config(args.dry_run, !args.no_home_symlinks);
    dodot_engine::execute(&operations, &config)?;

    info!(packs = pipeline.packs.len(), operations = operations.len(), "deploy complete");
    Ok(())
}
