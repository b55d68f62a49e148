//! Command handlers.
//!
//! Executes parsed commands against the [`ContactService`] and renders the
//! outcome as display text. This is the one place where recoverable errors
//! become messages; only storage failures are passed up to the caller.

use super::command::Command;
use crate::error::{BookError, ServiceError, StorageResult};
use crate::models::Record;
use crate::services::{AddOutcome, ContactService};
use tracing::{debug, warn};

/// Reply for a name the shell does not know.
pub const UNKNOWN_COMMAND: &str = "Wrong command";

/// Reply for an empty search result.
pub const NOTHING_FOUND: &str = "nothing were found...";

/// Reply for listing an empty book.
pub const NO_CONTACTS: &str = "no contacts saved yet...";

pub const HELP_TEXT: &str = "\
hello - greeting
add {name} {phone} [{YYYY.MM.DD}] - adds a contact or a phone to an existing contact
change {name} {old phone} {new phone} - replaces a phone number
phone {name} - shows a contact
find {text} - finds contacts whose name or phone contains the text
show_all - shows all contacts
delete {name} - deletes a contact
remove_phone {name} {phone} - removes a phone number from a contact
birthday {name} - days until the contact's birthday
set_birthday {name} {YYYY.MM.DD} - sets a contact's birthday
generate - generates 20 test contacts
help - shows this text
good bye, close, exit - to exit";

/// Dispatches commands to the contact service.
pub struct CommandHandler {
    service: ContactService,
}

impl CommandHandler {
    pub fn new(service: ContactService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &ContactService {
        &self.service
    }

    /// Parse and execute `name` with `args`.
    ///
    /// Unknown commands produce [`UNKNOWN_COMMAND`]. Every error other than
    /// a storage failure is rendered into the returned text.
    pub fn dispatch<S: AsRef<str>>(&mut self, name: &str, args: &[S]) -> StorageResult<String> {
        match Command::parse(name, args) {
            None => {
                debug!("Unknown command {:?}", name);
                Ok(UNKNOWN_COMMAND.to_string())
            }
            Some(Err(e)) => Ok(e.to_string()),
            Some(Ok(command)) => self.execute(command),
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> StorageResult<String> {
        let mutating = command.is_mutating();
        match self.run(command) {
            Ok(text) => {
                if mutating {
                    debug!("Book saved, {} contacts", self.service.directory().len());
                }
                Ok(text)
            }
            Err(ServiceError::Book(e)) => Ok(render_error(&e)),
            Err(ServiceError::Storage(e)) => Err(e),
        }
    }

    fn run(&mut self, command: Command) -> Result<String, ServiceError> {
        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add {
                name,
                phone,
                birthday,
            } => {
                let outcome = self
                    .service
                    .add_contact(&name, &phone, birthday.as_deref())?;
                match outcome {
                    AddOutcome::Created => format!("added: name-{} phone-{}", name, phone),
                    AddOutcome::Updated => format!("updated: name-{} phone-{}", name, phone),
                }
            }
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                self.service.change_phone(&name, &old_phone, &new_phone)?;
                format!("changed: name-{} phone-{}", name, old_phone)
            }
            Command::Phone { name } => self.service.find_contact(&name)?.to_string(),
            Command::Find { text } => render_records(self.service.search(&text))
                .unwrap_or_else(|| NOTHING_FOUND.to_string()),
            Command::ShowAll => self.show_all(),
            Command::Delete { name } => {
                self.service.delete_contact(&name)?;
                format!("deleted: name-{}", name)
            }
            Command::RemovePhone { name, phone } => {
                match self.service.remove_phone(&name, &phone)? {
                    0 => format!("{}: phone {} not found, nothing removed", name, phone),
                    _ => format!("removed: name-{} phone-{}", name, phone),
                }
            }
            Command::Birthday { name } => match self.service.days_to_birthday(&name)? {
                Some(days) => format!("{}: {} days to birthday", name, days),
                None => format!("{}: no birthday set", name),
            },
            Command::SetBirthday { name, birthday } => {
                self.service.set_birthday(&name, &birthday)?;
                format!("birthday set: name-{} birthday-{}", name, birthday)
            }
            Command::Generate => {
                self.service.generate(&mut rand::thread_rng())?;
                "success".to_string()
            }
            Command::Help => HELP_TEXT.to_string(),
        };
        Ok(text)
    }

    fn show_all(&self) -> String {
        let pages: Vec<String> = self
            .service
            .pages()
            .filter_map(|page| render_records(page.records().iter()))
            .collect();
        if pages.is_empty() {
            return NO_CONTACTS.to_string();
        }
        pages.join("\n")
    }
}

fn render_error(err: &BookError) -> String {
    warn!("Command failed: {:?}", err);
    err.to_string()
}

/// One record per line, `None` when there are no records.
fn render_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Option<String> {
    let lines: Vec<String> = records.into_iter().map(Record::to_string).collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageSize;
    use crate::repositories::JsonFileRepository;
    use tempfile::TempDir;

    fn handler(dir: &TempDir) -> CommandHandler {
        let repo = JsonFileRepository::new(dir.path().join("contacts.json"));
        let service = ContactService::load(Box::new(repo), PageSize::new(2).unwrap()).unwrap();
        CommandHandler::new(service)
    }

    #[test]
    fn test_hello_and_help() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&dir);
        assert_eq!(h.dispatch::<&str>("hello", &[]).unwrap(), "How can I help you?");
        assert!(h.dispatch::<&str>("help", &[]).unwrap().contains("show_all"));
    }

    #[test]
    fn test_unknown_and_missing() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&dir);
        assert_eq!(h.dispatch::<&str>("fly", &[]).unwrap(), UNKNOWN_COMMAND);
        assert_eq!(
            h.dispatch("add", &["Kelly"]).unwrap(),
            "Missing required parameters!"
        );
    }

    #[test]
    fn test_add_phone_and_change() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&dir);

        assert_eq!(
            h.dispatch("add", &["Kelly", "1112223333"]).unwrap(),
            "added: name-Kelly phone-1112223333"
        );
        assert_eq!(
            h.dispatch("add", &["Kelly", "4445556666"]).unwrap(),
            "updated: name-Kelly phone-4445556666"
        );
        assert_eq!(
            h.dispatch("change", &["Kelly", "1112223333", "9998887777"])
                .unwrap(),
            "changed: name-Kelly phone-1112223333"
        );
        assert_eq!(
            h.dispatch("phone", &["Kelly"]).unwrap(),
            "Contact name: Kelly, phones: 9998887777; 4445556666, birthday: None"
        );
    }

    #[test]
    fn test_errors_become_messages() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&dir);

        assert_eq!(
            h.dispatch("add", &["K", "1112223333"]).unwrap(),
            "Name must be minimum 2 characters!"
        );
        assert_eq!(
            h.dispatch("add", &["Kelly", "12"]).unwrap(),
            "Phone number must be 10 digits!"
        );
        assert_eq!(
            h.dispatch("phone", &["Nobody"]).unwrap(),
            "Can not find contact!"
        );

        h.dispatch("add", &["Kelly", "1112223333"]).unwrap();
        assert_eq!(
            h.dispatch("change", &["Kelly", "0000000000", "9998887777"])
                .unwrap(),
            "Phone number does not exist!"
        );
    }

    #[test]
    fn test_find() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&dir);
        h.dispatch("add", &["Kelly", "5551234567"]).unwrap();
        h.dispatch("add", &["Bob", "1112223333"]).unwrap();

        let found = h.dispatch("find", &["55"]).unwrap();
        assert_eq!(found.lines().count(), 1);
        assert!(found.contains("Kelly"));
        assert_eq!(h.dispatch("find", &["777"]).unwrap(), NOTHING_FOUND);
    }

    #[test]
    fn test_show_all_lists_every_page() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&dir);
        assert_eq!(h.dispatch::<&str>("show_all", &[]).unwrap(), NO_CONTACTS);

        for name in ["Ann", "Bob", "Cid", "Dee", "Eve"] {
            h.dispatch("add", &[name, "1112223333"]).unwrap();
        }
        let listing = h.dispatch::<&str>("show_all", &[]).unwrap();
        let names: Vec<&str> = listing
            .lines()
            .map(|l| l.trim_start_matches("Contact name: ").split(',').next().unwrap())
            .collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cid", "Dee", "Eve"]);
    }

    #[test]
    fn test_delete_remove_phone_and_birthday() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&dir);
        h.dispatch("add", &["Kelly", "1112223333"]).unwrap();

        assert_eq!(
            h.dispatch("birthday", &["Kelly"]).unwrap(),
            "Kelly: no birthday set"
        );
        assert_eq!(
            h.dispatch("set_birthday", &["Kelly", "1990.13.01"]).unwrap(),
            "birthday must have YYYY.MM.DD format!"
        );
        h.dispatch("set_birthday", &["Kelly", "1990.01.01"]).unwrap();
        assert!(h
            .dispatch("birthday", &["Kelly"])
            .unwrap()
            .ends_with("days to birthday"));

        assert_eq!(
            h.dispatch("remove_phone", &["Kelly", "0000000000"]).unwrap(),
            "Kelly: phone 0000000000 not found, nothing removed"
        );
        assert_eq!(
            h.dispatch("remove_phone", &["Kelly", "1112223333"]).unwrap(),
            "removed: name-Kelly phone-1112223333"
        );

        assert_eq!(h.dispatch("delete", &["Kelly"]).unwrap(), "deleted: name-Kelly");
        assert_eq!(h.dispatch("delete", &["Kelly"]).unwrap(), "Can not find contact!");
    }

    #[test]
    fn test_generate() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&dir);
        assert_eq!(h.dispatch::<&str>("generate", &[]).unwrap(), "success");
        assert_eq!(h.service().directory().len(), 20);
    }
}
