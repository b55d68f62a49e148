//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a valid phone number.
pub const PHONE_LENGTH: usize = 10;

/// A ten-digit phone number.
///
/// Uniqueness is not enforced: the same number may appear several times in
/// one record or across records.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// assert!(Phone::new("555-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly 10 characters
    /// - Only ASCII digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneLength` or
    /// `ValidationError::PhoneNotDigits` when a rule is violated.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Replace the number, keeping the old one if the new value is invalid.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        self.0 = phone;
        Ok(())
    }

    fn validate(phone: &str) -> Result<(), ValidationError> {
        if phone.chars().count() != PHONE_LENGTH {
            return Err(ValidationError::PhoneLength(phone.to_string()));
        }
        if !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PhoneNotDigits(phone.to_string()));
        }
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
