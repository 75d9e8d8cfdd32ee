//! Page source abstraction

use crate::error::FetchError;
use crate::types::User;
use async_trait::async_trait;

/// One page-at-a-time view of the users collection
///
/// Implementations fetch a single page and decode it. They must not retry and
/// must not interpret an empty page; both decisions belong to
/// [`UserFetcher`](super::UserFetcher).
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use user_reports::fetcher::PageSource;
/// use user_reports::{FetchError, User};
///
/// struct SinglePage(Vec<User>);
///
/// #[async_trait]
/// impl PageSource for SinglePage {
///     async fn fetch_page(&self, page: u64, _per_page: u32) -> Result<Vec<User>, FetchError> {
///         Ok(if page == 1 { self.0.clone() } else { Vec::new() })
///     }
/// }
/// ```
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch page `page` (1-based) holding at most `per_page` records
    async fn fetch_page(&self, page: u64, per_page: u32) -> Result<Vec<User>, FetchError>;
}
