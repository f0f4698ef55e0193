// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dodot list` — enumerate discovered packs (§6).

use crate::color;
use crate::commands::{OutputArgs, RootArgs};
use crate::output::render_list;
use anyhow::{Context, Result};
use dodot_core::DataPaths;
use serde::Serialize;

#[derive(clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub root: RootArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Serialize)]
struct PackSummary {
    name: String,
    path: String,
    disabled: bool,
}

pub fn run(args: ListArgs) -> Result<()> {
    let mut data = DataPaths::resolve().context("resolving dotfiles root")?;
    if let Some(root) = args.root.root {
        data.dotfiles_root = root;
    }

    let packs = dodot_engine::discover(&data.dotfiles_root)
        .with_context(|| format!("discovering packs under {}", data.dotfiles_root.display()))?;

    let summaries: Vec<PackSummary> = packs
        .iter()
        .map(|p| PackSummary { name: p.name.clone(), path: p.path.display().to_string(), disabled: p.config.disabled })
        .collect();

    render_list(args.output.output, &summaries, "No packs found", |summaries| {
        let name_w = summaries.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4);
        println!("{}  {}", color::header(&format!("{:<name_w$}", "NAME", name_w = name_w)), color::header("PATH"));
        for p in summaries {
            let suffix = if p.disabled { " (disabled)" } else { "" };
            println!("{:<name_w$}  {}{}", p.name, color::muted(&p.path), suffix, name_w = name_w);
        }
    })?;
    Ok(())
}
