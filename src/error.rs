//! Error types for runsweep operations.
//!
//! This module defines [`RunsweepError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RunsweepError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RunsweepError::Other`) for unexpected errors
//! - Listing errors abort the invocation; individual deletion errors are
//!   captured per run and never propagated as `RunsweepError`

use thiserror::Error;

/// Core error type for runsweep operations.
#[derive(Debug, Error)]
pub enum RunsweepError {
    /// The API answered with a non-success status code.
    #[error("GitHub API returned HTTP {status} for {url}")]
    ApiStatus { status: u16, url: String },

    /// The API answered with a body we could not interpret.
    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    /// Repository slug was not of the form `owner/repo`.
    #[error("Invalid repository slug '{slug}': expected OWNER/REPO")]
    InvalidSlug { slug: String },

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for runsweep operations.
pub type Result<T> = std::result::Result<T, RunsweepError>;
