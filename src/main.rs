//! `user-reports` command: fetch all users, print both CSV reports to stdout.
//!
//! Logs go to stderr (`RUST_LOG` controls the level, default `warn`) so stdout
//! carries only report output.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::runtime::Builder;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};
use user_reports::{Config, SuffixOrder};

/// `user-reports` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-reports",
    about = "Fetch every user from a paginated JSON API and print CSV reports",
    version
)]
struct CliArgs {
    /// JSON config file; flags below override its values.
    #[arg(long = "config", value_name = "path")]
    config: Option<PathBuf>,
    /// Users endpoint; `page` and `per_page` are appended.
    #[arg(long = "base-url", value_name = "url")]
    base_url: Option<String>,
    /// Records per page (1-100).
    #[arg(long = "per-page", value_name = "n")]
    per_page: Option<u32>,
    /// Per-request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "secs")]
    timeout_secs: Option<u64>,
    /// Row order for the suffix report: `alphabetical` or `count-descending`.
    #[arg(long = "suffix-order", value_name = "order")]
    suffix_order: Option<SuffixOrder>,
}

impl CliArgs {
    fn into_config(self) -> user_reports::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };

        if let Some(base_url) = self.base_url {
            config.api.base_url = base_url;
        }
        if let Some(per_page) = self.per_page {
            config.api.per_page = per_page;
        }
        if let Some(secs) = self.timeout_secs {
            config.api.timeout = Duration::from_secs(secs);
        }
        if let Some(order) = self.suffix_order {
            config.report.suffix_order = order;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Run failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "error: {err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> user_reports::Result<()> {
    let config = args.into_config()?;

    let runtime = Builder::new_current_thread().enable_all().build()?;

    // Render in memory; stdout gets both reports or nothing
    let mut buffer = Vec::new();
    runtime.block_on(user_reports::run(&config, &mut buffer))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&buffer)?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        if let Err(write_err) = writeln!(io::stderr().lock(), "tracing init failed: {e}") {
            drop(write_err);
        }
    }
}
