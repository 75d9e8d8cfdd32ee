//! CSV reports over a fetched user collection
//!
//! Each report reads the whole collection and writes its own CSV header plus
//! rows. [`write_reports`] prefixes each one with a numbered
//! `=== Question N: ... ===` heading and separates them with a blank line.
//!
//! Values are written as-is without CSV quoting.

mod domain_suffix;
mod test_suffix;

pub use domain_suffix::{
    DomainCountReport, SuffixCounts, email_suffix, generate_domain_count_report,
};
pub use test_suffix::{TestUsersReport, generate_test_users_report};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::types::User;
use std::io::Write;

/// A CSV report computed from the full user collection
pub trait Report {
    /// Human-readable title shown in the report heading
    fn title(&self) -> String;

    /// Write the CSV header and every row to `out`
    ///
    /// # Errors
    /// Returns error if writing to `out` fails.
    fn write_csv(&self, users: &[User], out: &mut dyn Write) -> Result<()>;
}

/// The two standard reports, in output order
pub fn standard_reports(config: &ReportConfig) -> Vec<Box<dyn Report>> {
    vec![
        Box::new(TestUsersReport::default()),
        Box::new(DomainCountReport::new(config.suffix_order)),
    ]
}

/// Write every report with its numbered heading
///
/// # Errors
/// Returns error if writing to `out` fails.
pub fn write_reports(users: &[User], reports: &[Box<dyn Report>], out: &mut dyn Write) -> Result<()> {
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== Question {}: {} ===", index + 1, report.title())?;
        report.write_csv(users, out)?;
    }
    out.flush()?;
    Ok(())
}
