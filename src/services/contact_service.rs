//! Contact service layer.
//!
//! Owns the directory and the repository it is persisted through. Every
//! operation that changes the directory writes a fresh snapshot before
//! returning.

use crate::directory::{Directory, Pages};
use crate::domain::{Birthday, PageSize, Phone};
use crate::error::{BookError, BookResult, ServiceResult, StorageResult};
use crate::models::Record;
use crate::repositories::DirectoryRepository;
use rand::Rng;
use tracing::{debug, info};

/// Number of contacts created by [`ContactService::generate`].
pub const GENERATED_CONTACTS: usize = 20;

/// What [`ContactService::add_contact`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was inserted
    Created,
    /// The name already existed; the phone was appended to that record
    Updated,
}

/// Contact operations on a directory with write-through persistence.
pub struct ContactService {
    directory: Directory,
    repository: Box<dyn DirectoryRepository>,
}

impl ContactService {
    /// Wrap an already loaded directory.
    pub fn new(directory: Directory, repository: Box<dyn DirectoryRepository>) -> Self {
        Self {
            directory,
            repository,
        }
    }

    /// Load the directory from `repository` and wrap it.
    pub fn load(
        repository: Box<dyn DirectoryRepository>,
        page_size: PageSize,
    ) -> StorageResult<Self> {
        let directory = repository.load(page_size)?;
        Ok(Self::new(directory, repository))
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Add a phone to a contact, creating the contact if needed.
    ///
    /// All inputs are validated before anything changes. For an existing
    /// contact a given birthday replaces the stored one.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> ServiceResult<AddOutcome> {
        Phone::new(phone)?;
        if let Some(raw) = birthday {
            Birthday::new(raw)?;
        }

        let outcome = match self.directory.find_mut(name) {
            Some(record) => {
                record.add_phone(phone)?;
                if let Some(raw) = birthday {
                    record.set_birthday(raw)?;
                }
                AddOutcome::Updated
            }
            None => {
                let mut record = Record::new(name, birthday)?;
                record.add_phone(phone)?;
                self.directory.add(record);
                AddOutcome::Created
            }
        };

        info!("Added phone to contact {} ({:?})", name, outcome);
        self.persist()?;
        Ok(outcome)
    }

    /// Replace `old` with `new` in the named contact.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ServiceResult<()> {
        self.record_mut(name)?.edit_phone(old, new)?;
        info!("Changed phone of contact {}", name);
        self.persist()?;
        Ok(())
    }

    /// Remove every copy of `phone` from the named contact.
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ServiceResult<usize> {
        let removed = self.record_mut(name)?.remove_phone(phone);
        debug!("Removed {} phone(s) from contact {}", removed, name);
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Set or replace the birthday of the named contact.
    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> ServiceResult<()> {
        self.record_mut(name)?.set_birthday(birthday)?;
        info!("Set birthday of contact {}", name);
        self.persist()?;
        Ok(())
    }

    /// Delete the named contact.
    pub fn delete_contact(&mut self, name: &str) -> ServiceResult<Record> {
        let record = self
            .directory
            .delete(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        info!("Deleted contact {}", name);
        self.persist()?;
        Ok(record)
    }

    /// Exact-name lookup.
    pub fn find_contact(&self, name: &str) -> BookResult<&Record> {
        self.directory
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Contacts whose name or phone contains `text`.
    pub fn search(&self, text: &str) -> Vec<&Record> {
        let results = self.directory.global_search(text);
        debug!("Search {:?} matched {} contact(s)", text, results.len());
        results
    }

    /// Days until the named contact's birthday, `None` when it has none.
    pub fn days_to_birthday(&self, name: &str) -> BookResult<Option<i64>> {
        Ok(self.find_contact(name)?.days_to_birthday())
    }

    /// Pages of the whole directory at the configured page size.
    pub fn pages(&self) -> Pages<'_> {
        self.directory.pages()
    }

    /// Change the listing page size. Not persisted.
    pub fn set_page_size(&mut self, size: usize) -> BookResult<()> {
        self.directory.set_page_size(size)
    }

    /// Add `test_1` .. `test_20` with random phones and birthdays.
    ///
    /// Names that already exist are skipped. Returns how many were created.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> ServiceResult<usize> {
        let mut created = 0;
        for i in 1..=GENERATED_CONTACTS {
            let birthday = format!(
                "{}.{}.{}",
                rng.gen_range(1970..2023),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28)
            );
            let mut record = Record::new(&format!("test_{i}"), Some(birthday.as_str()))?;
            record.add_phone(&rng.gen_range(1_000_000_000u64..10_000_000_000).to_string())?;
            if self.directory.add(record) {
                created += 1;
            }
        }
        info!("Generated {} test contacts", created);
        self.persist()?;
        Ok(created)
    }

    /// Write the current directory to the repository.
    pub fn persist(&self) -> StorageResult<()> {
        self.repository.save(&self.directory)
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.directory
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::repositories::JsonFileRepository;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> (ContactService, JsonFileRepository) {
        let repo = JsonFileRepository::new(dir.path().join("contacts.json"));
        let service = ContactService::load(Box::new(repo.clone()), PageSize::default()).unwrap();
        (service, repo)
    }

    fn phones(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_add_contact_creates_then_updates() {
        let dir = TempDir::new().unwrap();
        let (mut service, _) = service_in(&dir);

        let outcome = service.add_contact("Kelly", "5551234567", None).unwrap();
        assert_eq!(outcome, AddOutcome::Created);
        let outcome = service
            .add_contact("Kelly", "5559876543", Some("1990.01.02"))
            .unwrap();
        assert_eq!(outcome, AddOutcome::Updated);

        let record = service.find_contact("Kelly").unwrap();
        assert_eq!(phones(record), vec!["5551234567", "5559876543"]);
        assert_eq!(record.birthday().unwrap().to_string(), "1990.01.02");
    }

    #[test]
    fn test_add_contact_rejects_before_mutating() {
        let dir = TempDir::new().unwrap();
        let (mut service, _) = service_in(&dir);
        service.add_contact("Kelly", "5551234567", None).unwrap();

        let err = service
            .add_contact("Kelly", "5559876543", Some("1990.02.31"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Book(BookError::Validation(_))));
        assert_eq!(phones(service.find_contact("Kelly").unwrap()), vec!["5551234567"]);

        assert!(service.add_contact("K", "5551234567", None).is_err());
        assert!(service.add_contact("Bob", "555", None).is_err());
        assert_eq!(service.directory().len(), 1);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let dir = TempDir::new().unwrap();
        let (mut service, repo) = service_in(&dir);

        service.add_contact("Kelly", "1112223333", None).unwrap();
        service.add_contact("Bob", "4445556666", None).unwrap();
        service.change_phone("Kelly", "1112223333", "9998887777").unwrap();
        service.set_birthday("Bob", "1980.3.4").unwrap();
        service.delete_contact("Bob").unwrap();

        let reloaded = repo.load(PageSize::default()).unwrap();
        assert_eq!(&reloaded, service.directory());
        assert_eq!(phones(reloaded.find("Kelly").unwrap()), vec!["9998887777"]);
    }

    #[test]
    fn test_unknown_contact() {
        let dir = TempDir::new().unwrap();
        let (mut service, _) = service_in(&dir);

        let missing = BookError::ContactNotFound("Nobody".to_string());
        assert_eq!(service.find_contact("Nobody").unwrap_err(), missing);
        assert_eq!(service.days_to_birthday("Nobody").unwrap_err(), missing);
        assert!(matches!(
            service.change_phone("Nobody", "1112223333", "4445556666"),
            Err(ServiceError::Book(BookError::ContactNotFound(_)))
        ));
        assert!(matches!(
            service.delete_contact("Nobody"),
            Err(ServiceError::Book(BookError::ContactNotFound(_)))
        ));
    }

    #[test]
    fn test_remove_phone_reports_count() {
        let dir = TempDir::new().unwrap();
        let (mut service, _) = service_in(&dir);
        service.add_contact("Kelly", "1112223333", None).unwrap();
        service.add_contact("Kelly", "1112223333", None).unwrap();

        assert_eq!(service.remove_phone("Kelly", "0000000000").unwrap(), 0);
        assert_eq!(service.remove_phone("Kelly", "1112223333").unwrap(), 2);
        assert!(service.find_contact("Kelly").unwrap().phones().is_empty());
    }

    #[test]
    fn test_generate_is_idempotent_on_names() {
        let dir = TempDir::new().unwrap();
        let (mut service, _) = service_in(&dir);
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(service.generate(&mut rng).unwrap(), GENERATED_CONTACTS);
        assert_eq!(service.generate(&mut rng).unwrap(), 0);
        assert_eq!(service.directory().len(), GENERATED_CONTACTS);

        let record = service.find_contact("test_20").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert!(record.birthday().is_some());
    }

    #[test]
    fn test_set_page_size() {
        let dir = TempDir::new().unwrap();
        let (mut service, _) = service_in(&dir);
        for i in 0..5 {
            service
                .add_contact(&format!("name_{i}"), "1112223333", None)
                .unwrap();
        }
        service.set_page_size(2).unwrap();
        assert_eq!(service.pages().count(), 3);
        assert!(service.set_page_size(0).is_err());
    }
}
