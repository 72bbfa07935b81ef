//! Wire types for the workflow-runs endpoints.

use serde::{Deserialize, Serialize};

/// One recorded execution of a workflow.
///
/// The removal path depends on `id` only. The remaining fields are
/// deserialized when present so `runsweep list` can show something more
/// useful than a bare number; they are never consulted when deleting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Unique run identifier, the deletable unit.
    pub id: u64,
    /// Display name of the run, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lifecycle status (e.g. `completed`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Terminal conclusion (e.g. `success`, `failure`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    /// Creation timestamp as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One page of the paginated list-runs response.
#[derive(Debug, Clone, Deserialize)]
pub struct RunsPage {
    /// Total number of runs recorded for the workflow, across all pages.
    pub total_count: u64,
    /// The runs on this page.
    pub workflow_runs: Vec<WorkflowRun>,
}
