//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Leading `1`, a mobile prefix digit in 3..=9, then nine more digits.
static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("mobile pattern is a valid regex"));

/// Check whether a string is a valid 11-digit mobile number.
pub fn is_valid_phone(phone: &str) -> bool {
    MOBILE_PATTERN.is_match(phone)
}

/// A type-safe wrapper for mobile phone numbers.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("13800138000").unwrap();
/// assert_eq!(phone.as_str(), "13800138000");
/// assert!(PhoneNumber::new("125").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly 11 ASCII digits
    /// - First digit is `1`
    /// - Second digit is between `3` and `9`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The three-digit carrier prefix (e.g. `138`).
    pub fn prefix(&self) -> &str {
        &self.0[..3]
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
