// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations (§6 command surface).

pub mod deploy;
pub mod fill;
pub mod init;
pub mod install;
pub mod list;
pub mod status;

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dodot", version = env!("BUILD_GIT_HASH"), about = "dotfile deployment engine", styles = crate::color::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List discovered packs
    List(list::ListArgs),
    /// Deploy every linking handler's actions (symlinks, PATH entries, shell profile hooks)
    Deploy(deploy::DeployArgs),
    /// Run provisioning (install scripts, Homebrew), then deploy
    Install(install::InstallArgs),
    /// Show pack/handler deployment status
    Status(status::StatusArgs),
    /// Seed a new pack from a handler's template
    Fill(fill::FillArgs),
    /// Create a new, empty pack
    Init(init::InitArgs),
}

/// Shared `--root` override (§6 "dotfiles-root").
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RootArgs {
    /// Dotfiles root (defaults to $DOTFILES_ROOT, then ~/dotfiles)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,
}

/// Shared `--output` flag for read-only commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
