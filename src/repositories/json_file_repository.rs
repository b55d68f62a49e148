use crate::directory::Directory;
use crate::domain::PageSize;
use crate::error::StorageResult;
use crate::models::Record;
use crate::repositories::traits::DirectoryRepository;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk layout of a snapshot: every record, in insertion order.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot<'a> {
    contacts: Cow<'a, [Record]>,
}

/// Directory repository backed by a single JSON file.
///
/// Saving writes the whole directory to a sibling temporary file and renames
/// it over the target, so an interrupted save leaves the previous snapshot
/// readable.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DirectoryRepository for JsonFileRepository {
    fn load(&self, page_size: PageSize) -> StorageResult<Directory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No snapshot at {}, starting empty", self.path.display());
                return Ok(Directory::with_page_size(page_size));
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot<'static> = serde_json::from_slice(&bytes)?;
        let directory = Directory::from_records(snapshot.contacts.into_owned(), page_size);
        info!(
            "Loaded {} contacts from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        let snapshot = Snapshot {
            contacts: Cow::Borrowed(directory.records()),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        let temp = self.temp_path();
        fs::write(&temp, bytes)?;
        fs::rename(&temp, &self.path)?;

        debug!(
            "Saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}
