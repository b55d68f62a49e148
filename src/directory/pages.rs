//! Fixed-size pagination over the directory.

use crate::models::Record;
use std::iter::FusedIterator;
use std::slice::Chunks;

/// A contiguous run of directory entries, in insertion order.
///
/// Keys inside a page are unique because they are unique in the directory.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    records: &'a [Record],
}

impl<'a> Page<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record on this page by name.
    pub fn get(&self, key: &str) -> Option<&'a Record> {
        self.records.iter().find(|r| r.name().as_str() == key)
    }

    /// Names on this page.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.records.iter().map(|r| r.name().as_str())
    }

    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    /// `(name, record)` pairs on this page.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Record)> + 'a {
        self.records.iter().map(|r| (r.name().as_str(), r))
    }
}

/// Lazy iterator over the pages of a directory.
///
/// Every call to [`Directory::pages`](super::Directory::pages) starts a new
/// pass at the first entry. The last page may be shorter than the page size;
/// an empty directory produces no pages.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Pages<'a> {
    /// `page_size` must be non-zero; callers pass a validated `PageSize`.
    pub(super) fn new(records: &'a [Record], page_size: usize) -> Self {
        Self {
            chunks: records.chunks(page_size),
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|records| Page { records })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
