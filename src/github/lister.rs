//! Paginated run listing with a bounded worker pool.
//!
//! Listing probes the run count once, derives the page count, then fans the
//! page fetches out over at most [`POOL_WIDTH`] threads. Workers share only
//! the client and an atomic page cursor; each keeps its fetched runs locally
//! until the join barrier, so no locking is involved. Any page failure fails
//! the whole listing — a partial collection is never returned.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::Result;
use crate::github::client::GithubClient;
use crate::github::runs::WorkflowRun;
use crate::github::target::Target;

/// Maximum number of concurrent page fetches, independent of page count.
pub const POOL_WIDTH: usize = 10;

/// Default page size for the list-runs endpoint.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Every run recorded for a workflow, plus the count the listing was sized from.
#[derive(Debug)]
pub struct RunCollection {
    /// `total_count` reported by the count probe.
    pub total_count: u64,
    /// All runs across all pages. No cross-page order guarantee.
    pub runs: Vec<WorkflowRun>,
}

/// Lists every run recorded for a workflow.
pub struct RunLister<'a> {
    client: &'a GithubClient,
    per_page: u32,
}

impl<'a> RunLister<'a> {
    /// Create a lister with the default page size.
    pub fn new(client: &'a GithubClient) -> Self {
        Self::with_per_page(client, DEFAULT_PER_PAGE)
    }

    /// Create a lister with a custom page size.
    pub fn with_per_page(client: &'a GithubClient, per_page: u32) -> Self {
        Self {
            client,
            per_page: per_page.max(1),
        }
    }

    /// The configured page size.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Fetch the complete run collection for a workflow.
    ///
    /// Fails on the first page error; no partial collection escapes.
    pub fn list_all(&self, target: &Target) -> Result<RunCollection> {
        let total_count = self.client.workflow_runs_page(target, 1, 1)?.total_count;

        // Integer division plus one trailing page. When total_count is an
        // exact multiple of per_page the trailing page is empty; the extra
        // fetch is harmless and kept for parity with the sizing rule above.
        let page_count = total_count / u64::from(self.per_page) + 1;

        tracing::debug!(
            "Listing {}: {} runs across {} page fetches",
            target,
            total_count,
            page_count
        );

        let runs = self.fetch_pages(target, page_count)?;
        Ok(RunCollection { total_count, runs })
    }

    /// Fetch pages `1..=page_count` across the worker pool and flatten.
    fn fetch_pages(&self, target: &Target, page_count: u64) -> Result<Vec<WorkflowRun>> {
        let next_page = AtomicU64::new(1);
        let failed = AtomicBool::new(false);
        let width = POOL_WIDTH.min(page_count as usize).max(1);

        let mut results = Vec::with_capacity(width);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..width)
                .map(|_| {
                    scope.spawn(|| {
                        let mut runs = Vec::new();
                        loop {
                            // Once any worker has failed, stop claiming pages;
                            // the listing is aborting anyway.
                            if failed.load(Ordering::Relaxed) {
                                break;
                            }
                            let page = next_page.fetch_add(1, Ordering::Relaxed);
                            if page > page_count {
                                break;
                            }
                            match self.client.workflow_runs_page(target, page, self.per_page) {
                                Ok(fetched) => runs.extend(fetched.workflow_runs),
                                Err(e) => {
                                    failed.store(true, Ordering::Relaxed);
                                    return Err(e);
                                }
                            }
                        }
                        Ok(runs)
                    })
                })
                .collect();

            // Join barrier: every worker finishes before results are consumed.
            for handle in handles {
                results.push(handle.join().expect("page fetch worker panicked"));
            }
        });

        let mut all = Vec::new();
        for result in results {
            all.extend(result?);
        }
        Ok(all)
    }
}
