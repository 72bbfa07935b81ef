//! Sequential run deletion.
//!
//! Deletion is strictly sequential, one DELETE per run, in collection order.
//! A failed delete never stops the loop: the outcome is captured per run and
//! logged, and the headline count the caller reports stays "attempts".

use crate::github::client::GithubClient;
use crate::github::runs::WorkflowRun;
use crate::github::target::Target;

/// Result of one delete attempt.
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    /// The run the attempt addressed.
    pub run_id: u64,
    /// Error message when the attempt failed, `None` on success.
    pub error: Option<String>,
}

impl DeleteOutcome {
    /// Whether the delete request succeeded.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-item outcomes for a whole removal pass.
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// One outcome per run, in the order attempts were made.
    pub outcomes: Vec<DeleteOutcome>,
}

impl RemovalReport {
    /// Number of delete attempts made.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of attempts that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }
}

/// Deletes every run in a collection.
pub struct RunRemover<'a> {
    client: &'a GithubClient,
}

impl<'a> RunRemover<'a> {
    /// Create a remover backed by the given client.
    pub fn new(client: &'a GithubClient) -> Self {
        Self { client }
    }

    /// Issue one delete per run, in collection order.
    ///
    /// `observer` is called after each attempt (the purge command drives its
    /// progress bar through it). Failures are recorded, not propagated.
    pub fn remove_all<F>(&self, target: &Target, runs: &[WorkflowRun], mut observer: F) -> RemovalReport
    where
        F: FnMut(&DeleteOutcome),
    {
        let mut outcomes = Vec::with_capacity(runs.len());

        for run in runs {
            let outcome = match self.client.delete_run(target, run.id) {
                Ok(()) => DeleteOutcome {
                    run_id: run.id,
                    error: None,
                },
                Err(e) => {
                    tracing::warn!("Failed to delete run {}: {}", run.id, e);
                    DeleteOutcome {
                        run_id: run.id,
                        error: Some(e.to_string()),
                    }
                }
            };
            observer(&outcome);
            outcomes.push(outcome);
        }

        RemovalReport { outcomes }
    }
}
