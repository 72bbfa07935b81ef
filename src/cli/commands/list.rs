//! List command implementation.
//!
//! Shows every recorded run of a workflow without touching any of them.
//! Useful as a preflight before `purge`, and as a JSON source for scripting.

use console::style;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::github::{GithubClient, RunCollection, RunLister, Target, WorkflowRun};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let target = Target::from_slug(&self.args.repo, &self.args.workflow)?;
        let client = GithubClient::new(&self.args.api_url, &self.args.token)?;

        let lister = RunLister::with_per_page(&client, self.args.per_page);
        let collection = lister.list_all(&target)?;

        if self.args.json {
            let output = serde_json::to_string_pretty(&collection.runs).map_err(anyhow::Error::from)?;
            println!("{}", output);
            return Ok(CommandResult::success());
        }

        print_collection(&target, &collection);
        Ok(CommandResult::success())
    }
}

fn print_collection(target: &Target, collection: &RunCollection) {
    println!(
        "{} {} runs recorded for {}",
        style("Found").bold(),
        collection.total_count,
        target
    );

    for run in &collection.runs {
        println!("  {}", describe(run));
    }
}

fn describe(run: &WorkflowRun) -> String {
    let mut line = format!("{}", run.id);
    if let Some(created_at) = &run.created_at {
        line.push_str(&format!("  {}", created_at));
    }
    if let Some(status) = &run.status {
        line.push_str(&format!("  {}", status));
    }
    if let Some(conclusion) = &run.conclusion {
        line.push_str(&format!(" ({})", conclusion));
    }
    line
}
