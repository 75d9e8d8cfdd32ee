//! Active users whose email ends in `.test`

use super::Report;
use crate::error::Result;
use crate::types::User;
use std::io::Write;

/// Lists users with a given status whose email ends with a given suffix
///
/// Both comparisons ignore case. Rows keep input order and show the email as
/// originally returned; nothing is sorted or deduplicated.
#[derive(Clone, Debug)]
pub struct TestUsersReport {
    status: String,
    email_suffix: String,
}

impl Default for TestUsersReport {
    fn default() -> Self {
        Self {
            status: "active".to_string(),
            email_suffix: ".test".to_string(),
        }
    }
}

impl TestUsersReport {
    /// Whether `user` belongs in the report
    pub fn matches(&self, user: &User) -> bool {
        user.has_status(&self.status)
            && user
                .email
                .to_lowercase()
                .ends_with(&self.email_suffix.to_lowercase())
    }

    /// Matching users, in input order
    pub fn matching_users<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}

impl Report for TestUsersReport {
    fn title(&self) -> String {
        format!("Active users with {} emails", self.email_suffix)
    }

    fn write_csv(&self, users: &[User], out: &mut dyn Write) -> Result<()> {
        writeln!(out, "id,email")?;
        for user in self.matching_users(users) {
            writeln!(out, "{},{}", user.id, user.email)?;
        }
        Ok(())
    }
}

/// Write the active `.test` users CSV to `out`
///
/// # Errors
/// Returns error if writing to `out` fails.
pub fn generate_test_users_report(users: &[User], out: &mut dyn Write) -> Result<()> {
    TestUsersReport::default().write_csv(users, out)
}
