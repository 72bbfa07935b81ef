//! GitHub Actions API integration.
//!
//! This module holds everything that talks to the workflow-runs endpoints:
//!
//! - [`client`] - Authenticated blocking HTTP client
//! - [`target`] - Repository/workflow addressing
//! - [`runs`] - Wire types for the list-runs response
//! - [`lister`] - Paginated listing across a bounded worker pool
//! - [`remover`] - Sequential run deletion with per-item outcomes

pub mod client;
pub mod lister;
pub mod remover;
pub mod runs;
pub mod target;

pub use client::{GithubClient, DEFAULT_API_URL};
pub use lister::{RunCollection, RunLister, DEFAULT_PER_PAGE, POOL_WIDTH};
pub use remover::{DeleteOutcome, RemovalReport, RunRemover};
pub use runs::{RunsPage, WorkflowRun};
pub use target::Target;
