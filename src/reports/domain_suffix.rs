//! Email domain suffix counts

use super::Report;
use crate::config::SuffixOrder;
use crate::error::Result;
use crate::types::User;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

/// Final dot-delimited segment of the email's domain, lower-cased
///
/// Returns `None` for malformed emails: no `@`, nothing after the last `@`,
/// no `.` in the domain, or nothing after the domain's last `.`.
///
/// ```
/// use user_reports::reports::email_suffix;
///
/// assert_eq!(email_suffix("user@Example.TEST").as_deref(), Some("test"));
/// assert_eq!(email_suffix("a@b.c.io").as_deref(), Some("io"));
/// assert_eq!(email_suffix("w@nodot"), None);
/// ```
pub fn email_suffix(email: &str) -> Option<String> {
    let email = email.to_lowercase();
    let (_, domain) = email.rsplit_once('@')?;
    let (_, suffix) = domain.rsplit_once('.')?;
    if suffix.is_empty() {
        return None;
    }
    Some(suffix.to_string())
}

/// Per-suffix user counts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuffixCounts {
    counts: BTreeMap<String, u64>,
    skipped: usize,
}

impl SuffixCounts {
    /// Count suffixes across `users`, skipping malformed emails
    pub fn from_users(users: &[User]) -> Self {
        let mut counts = Self::default();
        for user in users {
            match email_suffix(&user.email) {
                Some(suffix) => *counts.counts.entry(suffix).or_insert(0) += 1,
                None => {
                    debug!(id = user.id, email = %user.email, "Skipping malformed email");
                    counts.skipped += 1;
                }
            }
        }
        counts
    }

    /// Count for one suffix, if it was observed
    pub fn get(&self, suffix: &str) -> Option<u64> {
        self.counts.get(suffix).copied()
    }

    /// Number of distinct suffixes
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no suffix was observed
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Users excluded because their email was malformed
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// `(suffix, count)` rows in the requested order
    pub fn rows(&self, order: SuffixOrder) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(suffix, count)| (suffix.as_str(), *count))
            .collect();
        // BTreeMap iteration is already alphabetical
        if order == SuffixOrder::CountDescending {
            rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        }
        rows
    }
}

/// Counts users per email domain suffix
#[derive(Clone, Copy, Debug, Default)]
pub struct DomainCountReport {
    order: SuffixOrder,
}

impl DomainCountReport {
    /// Create a report listing rows in `order`
    pub fn new(order: SuffixOrder) -> Self {
        Self { order }
    }
}

impl Report for DomainCountReport {
    fn title(&self) -> String {
        "Email domain suffix counts".to_string()
    }

    fn write_csv(&self, users: &[User], out: &mut dyn Write) -> Result<()> {
        let counts = SuffixCounts::from_users(users);
        if counts.skipped() > 0 {
            debug!(skipped = counts.skipped(), "Malformed emails left out of suffix counts");
        }

        writeln!(out, "Domain,count")?;
        for (suffix, count) in counts.rows(self.order) {
            writeln!(out, "{suffix},{count}")?;
        }
        Ok(())
    }
}

/// Write the domain suffix count CSV to `out`, alphabetically by suffix
///
/// # Errors
/// Returns error if writing to `out` fails.
pub fn generate_domain_count_report(users: &[User], out: &mut dyn Write) -> Result<()> {
    DomainCountReport::default().write_csv(users, out)
}
