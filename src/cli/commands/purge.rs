//! Purge command implementation.
//!
//! Lists every recorded run of a workflow, then deletes them one by one.
//! Listing is fail-fast; deletion keeps going past individual failures and
//! reports the number of attempts made.

use console::{style, user_attended};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::PurgeArgs;
use crate::error::{Result, RunsweepError};
use crate::github::{GithubClient, RunLister, RunRemover, Target};

use super::dispatcher::{Command, CommandResult};

/// The purge command implementation.
pub struct PurgeCommand {
    args: PurgeArgs,
    quiet: bool,
}

impl PurgeCommand {
    /// Create a new purge command.
    pub fn new(args: PurgeArgs, quiet: bool) -> Self {
        Self { args, quiet }
    }
}

impl Command for PurgeCommand {
    fn execute(&self) -> Result<CommandResult> {
        let target = Target::from_slug(&self.args.repo, &self.args.workflow)?;
        let client = GithubClient::new(&self.args.api_url, &self.args.token)?;

        let lister = RunLister::with_per_page(&client, self.args.per_page);
        let collection = lister.list_all(&target)?;

        println!(
            "{} {} runs recorded for {}",
            style("Found").bold(),
            collection.total_count,
            target
        );

        if collection.runs.is_empty() {
            println!("Nothing to remove.");
            return Ok(CommandResult::success());
        }

        if self.args.dry_run {
            println!(
                "{} {} runs would be removed",
                style("Dry-run:").yellow().bold(),
                collection.runs.len()
            );
            return Ok(CommandResult::success());
        }

        if !self.args.yes && !confirm_removal(&target, collection.runs.len())? {
            println!("Aborted.");
            return Ok(CommandResult::failure(1));
        }

        let bar = removal_bar(collection.runs.len() as u64, self.quiet);
        let remover = RunRemover::new(&client);
        let report = remover.remove_all(&target, &collection.runs, |_| bar.inc(1));
        bar.finish_and_clear();

        // The headline count is attempts, not confirmed deletions; failures
        // get their own line below.
        println!(
            "{} {} runs",
            style("Removed").green().bold(),
            report.attempted()
        );

        if report.failed() > 0 {
            println!(
                "{} {} of {} delete requests failed (re-run to retry them)",
                style("Warning:").yellow().bold(),
                report.failed(),
                report.attempted()
            );
        }

        Ok(CommandResult::success())
    }
}

/// Ask before deleting. Refuses instead of hanging when no terminal is attached.
fn confirm_removal(target: &Target, count: usize) -> Result<bool> {
    if !user_attended() {
        return Err(RunsweepError::Other(anyhow::anyhow!(
            "Refusing to delete {} runs without --yes in a non-interactive session",
            count
        )));
    }

    Confirm::new()
        .with_prompt(format!(
            "Permanently delete {} runs of {}?",
            count, target
        ))
        .default(false)
        .interact()
        .map_err(|e| RunsweepError::Io(e.into()))
}

fn removal_bar(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} runs")
            .unwrap(),
    );
    bar
}
