//! Contact model: one entry in the contact book.

use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Timestamp format used for `created_at` (local time, microsecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time formatted as an ISO 8601 timestamp.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

// A null or empty stored timestamp is replaced with the load time, same as a missing one.
fn timestamp_or_now<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Option::<String>::deserialize(deserializer)?;
    Ok(stored
        .filter(|ts| !ts.trim().is_empty())
        .unwrap_or_else(now_timestamp))
}

/// A contact as stored in the JSON contact file.
///
/// Records written by older versions may lack `email` or `created_at`;
/// those fields fall back to `None` and the load time respectively. A
/// `created_at` of `null` or `""` is treated as missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Display name, never blank for contacts created through the service
    pub name: String,

    /// 11-digit mobile number
    #[serde(default)]
    pub phone: Option<String>,

    /// Optional email address
    #[serde(default)]
    pub email: Option<String>,

    /// When the contact was created (ISO 8601 local timestamp)
    #[serde(default = "now_timestamp", deserialize_with = "timestamp_or_now")]
    pub created_at: String,
}

impl Contact {
    /// Create a contact stamped with the current time.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: Some(phone.into()),
            email: None,
            created_at: now_timestamp(),
        }
    }

    /// Attach an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Basic structural check: non-empty name and, if present, an
    /// 11-character all-digit phone.
    ///
    /// This is looser than [`crate::domain::PhoneNumber`], which also checks
    /// the mobile prefix; it is used to flag bad records read from disk.
    pub fn is_valid(&self) -> bool {
        if self.name.is_empty() {
            return false;
        }
        match &self.phone {
            Some(phone) => phone.len() == 11 && phone.chars().all(|c| c.is_ascii_digit()),
            None => true,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.phone.as_deref().unwrap_or(""))
    }
}
