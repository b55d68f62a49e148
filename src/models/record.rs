//! Record model representing one contact in the book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, any number of phone numbers and an optional birthday.
///
/// Phones keep their insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Fails if the name or the birthday (when given) does not validate.
    pub fn new(name: &str, birthday: Option<&str>) -> BookResult<Self> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::new).transpose()?;
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove every phone equal to `raw`.
    ///
    /// Removing a number the record does not have is not an error; the
    /// returned count tells the caller whether anything was removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }

    /// First phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before the lookup, so an invalid replacement is
    /// reported even when `old` is missing.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = Phone::new(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;
        Ok(())
    }

    /// Days until the next birthday, counted from the local date.
    ///
    /// `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "None"),
        }
    }
}
