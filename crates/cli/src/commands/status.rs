// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dodot status` — per-action deployment state (§6).

use crate::color;
use crate::commands::{OutputArgs, RootArgs};
use crate::output::render_list;
use crate::pipeline::Pipeline;
use anyhow::Result;
use dodot_core::{content_hash, Action, ActionKind};
use dodot_storage::read_sentinel;
use serde::Serialize;
use std::path::Path;

#[derive(clap::Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub root: RootArgs,
    /// Restrict the report to these packs
    pub packs: Vec<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Serialize)]
struct StatusEntry {
    pack: String,
    handler: String,
    target: String,
    state: &'static str,
}

pub fn run(args: StatusArgs) -> Result<()> {
    let pipeline = Pipeline::load(args.root.root, &args.packs)?;
    let actions = pipeline.actions()?;

    let mut entries = Vec::new();
    for action in &actions {
        if let ActionKind::RecordProvisioning { .. } = action.kind {
            continue;
        }
        entries.push(status_of(action, &pipeline)?);
    }

    render_list(args.output.output, &entries, "Nothing to deploy", |entries| {
        let pack_w = entries.iter().map(|e| e.pack.len()).max().unwrap_or(4).max(4);
        let handler_w = entries.iter().map(|e| e.handler.len()).max().unwrap_or(7).max(7);
        for e in entries {
            let marker = if e.state == "deployed" { color::header(e.state) } else { color::muted(e.state) };
            println!("{:<pack_w$}  {:<handler_w$}  {:<40}  {}", e.pack, e.handler, e.target, marker, pack_w = pack_w, handler_w = handler_w);
        }
    })?;
    Ok(())
}

fn status_of(action: &Action, pipeline: &Pipeline) -> Result<StatusEntry> {
    let (target, state) = match &action.kind {
        ActionKind::Link { target, .. } => (target.display().to_string(), symlink_state(target)),
        ActionKind::AddToPath { dir } => {
            let deployed = pipeline.data.data_dir.join("deployed/path").join(format!("{}-{}", action.pack_name, basename(dir)));
            (dir.display().to_string(), symlink_state(&deployed))
        }
        ActionKind::AddToShellProfile { script } => {
            let deployed = pipeline.data.data_dir.join("deployed/shell_profile").join(format!("{}.sh", action.pack_name));
            (script.display().to_string(), symlink_state(&deployed))
        }
        ActionKind::Brew { brewfile_path } => (
            brewfile_path.display().to_string(),
            provisioning_state(&pipeline.data.sentinel_dir("homebrew"), &action.pack_name, brewfile_path)?,
        ),
        ActionKind::RunScript { script_path } => (
            script_path.display().to_string(),
            provisioning_state(&pipeline.data.sentinel_dir("install"), &action.pack_name, script_path)?,
        ),
        ActionKind::RecordProvisioning { .. } => unreachable!("filtered above"),
    };
    Ok(StatusEntry { pack: action.pack_name.clone(), handler: action.handler_name.clone(), target, state })
}

fn symlink_state(path: &Path) -> &'static str {
    if std::fs::symlink_metadata(path).is_ok() {
        "deployed"
    } else {
        "pending"
    }
}

fn provisioning_state(sentinel_dir: &Path, pack: &str, source: &Path) -> Result<&'static str> {
    let bytes = std::fs::read(source)?;
    let hash = content_hash(&bytes);
    let recorded = read_sentinel(sentinel_dir, pack)?;
    Ok(if recorded.as_deref() == Some(hash.as_str()) { "deployed" } else { "pending" })
}

fn basename(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
