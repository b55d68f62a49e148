//! Field validation errors.

use std::fmt;

/// Errors that can occur when constructing or reassigning a validated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is shorter than two characters.
    NameTooShort(String),

    /// The phone number does not have exactly ten characters.
    PhoneLength(String),

    /// The phone number contains something other than ASCII digits.
    PhoneNotDigits(String),

    /// The birthday is not a `YYYY.MM.DD` calendar date.
    InvalidBirthday(String),

    /// The page size is zero.
    InvalidPageSize(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort(_) => write!(f, "Name must be minimum 2 characters!"),
            Self::PhoneLength(_) => write!(f, "Phone number must be 10 digits!"),
            Self::PhoneNotDigits(_) => write!(f, "Phone number must contain only digits!"),
            Self::InvalidBirthday(_) => write!(f, "birthday must have YYYY.MM.DD format!"),
            Self::InvalidPageSize(_) => write!(f, "Portion size must be 1 or more items!"),
        }
    }
}

impl std::error::Error for ValidationError {}
