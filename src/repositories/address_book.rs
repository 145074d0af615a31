//! In-memory address book keyed by contact name.

use crate::models::Record;
use crate::services::{upcoming_birthdays, UpcomingBirthdays};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// Collection of records, one per exact name.
///
/// Lookup goes through a `HashMap`; a separate list keeps the order in
/// which names were first added so listings are stable. Overwriting a
/// record keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);

        if previous.is_none() {
            self.order.push(key);
        } else {
            debug!(name = %key, "Overwrote existing record");
        }

        previous
    }

    /// Exact-match lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        debug!(name, "Deleted record");
        Some(removed)
    }

    /// Records in the order their names were first added.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to greet next week, bucketed by weekday.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays {
        upcoming_birthdays(self.records(), today)
    }
}
