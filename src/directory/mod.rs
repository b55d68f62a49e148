//! The contact directory.
//!
//! A keyed collection of [`Record`]s. Records are keyed by their name and
//! kept in insertion order, which is the order used for search results and
//! pagination. Lookups are linear scans.

mod pages;

pub use pages::{Page, Pages};

use crate::domain::PageSize;
use crate::error::BookResult;
use crate::models::Record;

/// All contacts, keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
    page_size: PageSize,
}

impl Directory {
    /// Create an empty directory with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory that pages by `page_size`.
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            records: Vec::new(),
            page_size,
        }
    }

    /// Build a directory from records in order, applying [`Directory::add`]
    /// to each one.
    pub fn from_records(records: impl IntoIterator<Item = Record>, page_size: PageSize) -> Self {
        let mut directory = Self::with_page_size(page_size);
        for record in records {
            directory.add(record);
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Change the page size used by [`Directory::pages`].
    ///
    /// # Errors
    ///
    /// Fails with a validation error for zero; the old size is kept.
    pub fn set_page_size(&mut self, size: usize) -> BookResult<()> {
        self.page_size = PageSize::new(size)?;
        Ok(())
    }

    /// Insert a record unless its name is already taken.
    ///
    /// An existing record is never overwritten and a duplicate is dropped
    /// without an error. Returns `true` when the record was inserted.
    pub fn add(&mut self, record: Record) -> bool {
        if self.contains(record.name().as_str()) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Exact-name lookup.
    pub fn find(&self, key: &str) -> Option<&Record> {
        self.position(key).map(|i| &self.records[i])
    }

    /// Exact-name lookup for in-place phone or birthday changes.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut Record> {
        let index = self.position(key)?;
        Some(&mut self.records[index])
    }

    /// Remove and return the record stored under `key`.
    ///
    /// Deleting a missing name is a no-op and returns `None`.
    pub fn delete(&mut self, key: &str) -> Option<Record> {
        self.position(key).map(|i| self.records.remove(i))
    }

    /// Records whose name or any phone contains `needle`.
    ///
    /// Each record appears at most once, in insertion order. No match gives
    /// an empty vector.
    pub fn global_search(&self, needle: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| {
                record.name().as_str().contains(needle)
                    || record.phones().iter().any(|p| p.as_str().contains(needle))
            })
            .collect()
    }

    /// Pages of the configured page size, starting from the first entry.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(&self.records, self.page_size.get())
    }

    /// Pages of an explicit size, starting from the first entry.
    pub fn paginate(&self, page_size: PageSize) -> Pages<'_> {
        Pages::new(&self.records, page_size.get())
    }

    /// All `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|r| (r.name().as_str(), r))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == key)
    }
}
