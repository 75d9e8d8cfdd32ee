//! Paginated user fetching
//!
//! [`UserFetcher`] walks pages 1, 2, 3, ... of a [`PageSource`] and stops at the
//! first empty page. There is no other termination signal: no total count, no
//! next-page link. A source that never returns an empty page keeps the loop
//! running forever.
//!
//! The first failing page aborts the whole fetch; records staged from earlier
//! pages are dropped.

mod http_source;
mod traits;

pub use http_source::HttpPageSource;
pub use traits::PageSource;

use crate::error::FetchError;
use crate::types::User;
use tracing::{debug, info, warn};

/// Counters from one completed fetch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Page requests issued, including the final empty page
    pub pages_requested: u64,
    /// Records accumulated across all pages
    pub records: usize,
}

/// Drives a [`PageSource`] until it is exhausted
pub struct UserFetcher<S> {
    source: S,
    per_page: u32,
}

impl<S: PageSource> UserFetcher<S> {
    /// Create a fetcher requesting `per_page` records per page
    pub fn new(source: S, per_page: u32) -> Self {
        Self { source, per_page }
    }

    /// The underlying page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Records requested per page
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Fetch every user across all pages, in page-then-within-page order
    ///
    /// # Errors
    /// Returns the first [`FetchError`] any page produces.
    pub async fn fetch_all_users(&self) -> Result<Vec<User>, FetchError> {
        self.fetch_all_users_with_stats()
            .await
            .map(|(users, _)| users)
    }

    /// Same as [`fetch_all_users`](Self::fetch_all_users), also returning counters
    ///
    /// # Errors
    /// Returns the first [`FetchError`] any page produces.
    pub async fn fetch_all_users_with_stats(&self) -> Result<(Vec<User>, FetchStats), FetchError> {
        let mut users = Vec::new();
        let mut page: u64 = 1;

        loop {
            debug!(page, per_page = self.per_page, "Requesting users page");

            let batch = match self.source.fetch_page(page, self.per_page).await {
                Ok(batch) => batch,
                Err(e) => {
                    warn!(page, staged = users.len(), error = %e, "Aborting user fetch");
                    return Err(e);
                }
            };

            if batch.is_empty() {
                break;
            }

            debug!(page, records = batch.len(), "Received users page");
            users.extend(batch);
            page += 1;
        }

        let stats = FetchStats {
            pages_requested: page,
            records: users.len(),
        };
        info!(
            pages = stats.pages_requested,
            records = stats.records,
            "Fetched all users"
        );

        Ok((users, stats))
    }
}
