//! HTTP client for the GitHub Actions REST API.
//!
//! Wraps a blocking `reqwest` client carrying the bearer token and the
//! GitHub JSON media type on every request. The base URL is injectable so
//! the client works against GitHub Enterprise hosts and mock servers alike.

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::error::{Result, RunsweepError};
use crate::github::runs::RunsPage;
use crate::github::target::Target;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type requested from the API.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Request timeout for every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated client for the workflow-runs endpoints.
pub struct GithubClient {
    client: Client,
    api_url: String,
}

impl GithubClient {
    /// Create a client for the given API base URL and bearer token.
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .context("Token contains characters not allowed in a header value")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(concat!("runsweep/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// The API base URL this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch one page of runs for a workflow.
    pub fn workflow_runs_page(&self, target: &Target, page: u64, per_page: u32) -> Result<RunsPage> {
        let url = format!(
            "{}/repos/{}/{}/actions/workflows/{}/runs?per_page={}&page={}",
            self.api_url, target.owner, target.repo, target.workflow, per_page, page
        );

        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RunsweepError::ApiStatus {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<RunsPage>()
            .map_err(|e| RunsweepError::MalformedResponse {
                url,
                message: e.to_string(),
            })
    }

    /// Delete one run by id.
    pub fn delete_run(&self, target: &Target, run_id: u64) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/actions/runs/{}",
            self.api_url, target.owner, target.repo, run_id
        );

        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RunsweepError::ApiStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(())
    }
}
