//! Runsweep - bulk deletion of GitHub Actions workflow run history.
//!
//! GitHub keeps every recorded run of a workflow forever and offers no way
//! to delete them in bulk. Runsweep lists every run of a workflow through
//! the paginated REST API and deletes them one by one.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`github`] - API client, run listing, and run removal
//!
//! # Example
//!
//! ```no_run
//! use runsweep::github::{GithubClient, RunLister, RunRemover, Target, DEFAULT_API_URL};
//!
//! let target = Target::from_slug("acme/widgets", "ci.yml").unwrap();
//! let client = GithubClient::new(DEFAULT_API_URL, "ghp_token").unwrap();
//!
//! let collection = RunLister::new(&client).list_all(&target).unwrap();
//! let report = RunRemover::new(&client).remove_all(&target, &collection.runs, |_| {});
//! println!("removed {} runs", report.attempted());
//! ```

pub mod cli;
pub mod error;
pub mod github;

pub use error::{Result, RunsweepError};
