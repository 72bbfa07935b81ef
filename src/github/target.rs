//! Purge target description.
//!
//! A [`Target`] names the workflow whose runs are being listed and removed.
//! It is built once from CLI input and passed by reference into the lister
//! and remover, so neither component reads process-wide state.

use std::fmt;

use crate::error::{Result, RunsweepError};

/// The repository and workflow a sweep operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Workflow filename (e.g. `ci.yml`).
    pub workflow: String,
}

impl Target {
    /// Build a target from an `OWNER/REPO` slug and a workflow filename.
    pub fn from_slug(slug: &str, workflow: &str) -> Result<Self> {
        let (owner, repo) = slug.split_once('/').ok_or_else(|| RunsweepError::InvalidSlug {
            slug: slug.to_string(),
        })?;

        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(RunsweepError::InvalidSlug {
                slug: slug.to_string(),
            });
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            workflow: workflow.to_string(),
        })
    }

    /// The `OWNER/REPO` slug this target was built from.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.owner, self.repo, self.workflow)
    }
}
