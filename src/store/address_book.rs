//! In-memory address book keyed by contact name.

use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The collection of all records, keyed by contact name.
///
/// Records iterate and display in insertion order. Adding a record under
/// an existing name replaces the stored record while keeping the name's
/// original position; deleting an entry preserves the relative order of
/// the remaining entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its contact name, replacing any existing
    /// record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!("Replaced existing record for {}", name);
        } else {
            tracing::debug!("Added record for {}", name);
        }
    }

    /// Get the record for `name`, if any.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Get a mutable reference to the record for `name`, if any.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record for `name`; `None` if absent.
    ///
    /// Remaining records keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!("Deleted record for {}", name);
        }
        removed
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .records
            .values()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
