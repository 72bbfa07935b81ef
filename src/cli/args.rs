//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::github::DEFAULT_API_URL;

/// Runsweep - Bulk deletion of GitHub Actions workflow run history.
#[derive(Debug, Parser)]
#[command(name = "runsweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output (no progress bar)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List and delete every recorded run of a workflow
    Purge(PurgeArgs),

    /// List recorded runs of a workflow without deleting anything
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `purge` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PurgeArgs {
    /// Repository in OWNER/REPO form
    pub repo: String,

    /// Workflow filename (e.g. ci.yml)
    pub workflow: String,

    /// GitHub token used as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the GitHub REST API (set for GitHub Enterprise hosts)
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Page size used when listing runs
    #[arg(long, default_value_t = 100)]
    pub per_page: u32,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// List and count runs without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Repository in OWNER/REPO form
    pub repo: String,

    /// Workflow filename (e.g. ci.yml)
    pub workflow: String,

    /// GitHub token used as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the GitHub REST API (set for GitHub Enterprise hosts)
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Page size used when listing runs
    #[arg(long, default_value_t = 100)]
    pub per_page: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
