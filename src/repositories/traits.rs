use crate::directory::Directory;
use crate::domain::PageSize;
use crate::error::StorageResult;

/// Repository for persisting the whole directory.
///
/// The directory is always loaded and saved as one snapshot; there are no
/// per-record operations. Implementations decide the storage medium (file,
/// memory, mock).
pub trait DirectoryRepository {
    /// Load the last saved snapshot.
    ///
    /// A repository with nothing saved yet returns an empty directory.
    fn load(&self, page_size: PageSize) -> StorageResult<Directory>;

    /// Replace the stored snapshot with `directory`.
    fn save(&self, directory: &Directory) -> StorageResult<()>;
}
