//! # user-reports
//!
//! Pages through a users JSON API and prints two CSV reports over the
//! collected records:
//!
//! 1. active users whose email ends in `.test`
//! 2. how many users share each email domain suffix (`com`, `test`, ...)
//!
//! Fetching runs to completion before any report is written. A failed page
//! aborts the run, so reports are either complete or absent.
//!
//! ## Quick Start
//!
//! ```no_run
//! use user_reports::{Config, run};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let mut stdout = std::io::stdout().lock();
//!     run(&config, &mut stdout).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Paginated user fetching
pub mod fetcher;
/// CSV reports
pub mod reports;
/// Core record types
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, Config, ReportConfig, SuffixOrder};
pub use error::{Error, FetchError, Result};
pub use fetcher::{FetchStats, HttpPageSource, PageSource, UserFetcher};
pub use reports::{Report, generate_domain_count_report, generate_test_users_report};
pub use types::User;

use std::io::Write;

/// Fetch every user over HTTP, then write both reports to `out`
///
/// Nothing is written unless the fetch succeeds.
///
/// # Errors
/// Returns error if the configuration is invalid, any page fails, or writing
/// to `out` fails.
pub async fn run(config: &Config, out: &mut dyn Write) -> Result<FetchStats> {
    config.validate()?;

    let source = HttpPageSource::new(&config.api)?;
    tracing::info!(endpoint = %source.endpoint(), per_page = config.api.per_page, "Fetching users");

    let fetcher = UserFetcher::new(source, config.api.per_page);
    let (users, stats) = fetcher.fetch_all_users_with_stats().await?;

    reports::write_reports(&users, &reports::standard_reports(&config.report), out)?;
    Ok(stats)
}
