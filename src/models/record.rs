//! Record model representing a single contact entry.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book: a name plus the phone numbers filed
/// under it.
///
/// The name is fixed at creation. Phone numbers keep their insertion
/// order and may repeat; all mutation goes through the methods below so
/// that only validated numbers ever enter the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with the given contact name and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `number` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `number` is not exactly 10 digits;
    /// the record is unchanged in that case.
    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose value equals `number`.
    ///
    /// Returns the removed phone, or `None` if no phone matched (the
    /// record is left untouched).
    pub fn remove_phone(&mut self, number: &str) -> Option<PhoneNumber> {
        let index = self.phones.iter().position(|p| p.as_str() == number)?;
        Some(self.phones.remove(index))
    }

    /// Replace the phone `old` with a newly validated `new` number.
    ///
    /// The replacement is appended to the end of the list rather than
    /// taking over `old`'s position.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::PhoneNotFound`] if `old` is not in the record;
    /// the phone list is unchanged in that case. Returns a validation
    /// error if `new` is not exactly 10 digits; `old` has already been
    /// removed by then.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }

        self.remove_phone(old);
        self.add_phone(new)
    }

    /// Get the first phone whose value equals `number`, if any.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
