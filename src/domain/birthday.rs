//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,4})\.(\d{1,2})\.(\d{1,2})$").expect("Failed to compile birthday regex")
});

/// A birthday entered as `YYYY.MM.DD`.
///
/// Records keep an `Option<Birthday>`; a missing birthday is not an error.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990.7.4").unwrap();
/// assert_eq!(birthday.to_string(), "1990.07.04");
/// assert!(Birthday::new("1990.02.30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `YYYY.MM.DD`.
    ///
    /// Month and day may omit the leading zero. The date has to exist in the
    /// calendar, so `2023.02.29` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the input is not three
    /// dot-separated numbers forming a real date.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse(raw).map(Self)
    }

    /// Replace the date, keeping the old one if the new value is invalid.
    pub fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.0 = Self::parse(raw)?;
        Ok(())
    }

    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(raw.to_string());
        let caps = BIRTHDAY_RE.captures(raw.trim()).ok_or_else(invalid)?;

        let year: i32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let day: u32 = caps[3].parse().map_err(|_| invalid())?;

        if year < 1 {
            return Err(invalid());
        }
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next occurrence of this birthday.
    ///
    /// Returns 0 when `today` is the birthday. A February 29 birthday is
    /// celebrated on February 28 in non-leap years.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        let this_year = self.occurrence_in(today.year());
        let next = if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        };
        (next - today).num_days()
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.0)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y.%m.%d"))
    }
}
