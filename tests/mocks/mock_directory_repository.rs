use contact_book::directory::Directory;
use contact_book::domain::PageSize;
use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Record;
use contact_book::repositories::DirectoryRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the last saved snapshot in memory, counts calls, and can be told to
/// fail every save. Clones share state, so a test can keep one clone while
/// the service owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectoryRepository {
    snapshot: Arc<Mutex<Option<Vec<Record>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a new empty MockDirectoryRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose stored snapshot holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::new();
        *repo.snapshot.lock().unwrap() = Some(records);
        repo
    }

    /// Records in the last saved snapshot, `None` if nothing was saved.
    pub fn saved_records(&self) -> Option<Vec<Record>> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl DirectoryRepository for MockDirectoryRepository {
    fn load(&self, page_size: PageSize) -> StorageResult<Directory> {
        self.track_call("load");

        let records = self.snapshot.lock().unwrap().clone().unwrap_or_default();
        Ok(Directory::from_records(records, page_size))
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }

        *self.snapshot.lock().unwrap() = Some(directory.records().to_vec());
        Ok(())
    }
}
