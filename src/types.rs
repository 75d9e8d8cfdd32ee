//! Core record types

use serde::{Deserialize, Deserializer, Serialize};

/// One user record as returned by the users API
///
/// Decoding is lenient: unknown fields are ignored, and missing or `null`
/// fields fall back to `0` / empty string instead of failing the whole page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    /// Email address, exactly as the API returned it
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    /// Account status ("active" / "inactive"), compared case-insensitively
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl User {
    /// Build a user record
    pub fn new(id: i64, email: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            status: status.into(),
        }
    }

    /// Whether the status equals `status`, ignoring case
    pub fn has_status(&self, status: &str) -> bool {
        self.status.to_lowercase() == status.to_lowercase()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
