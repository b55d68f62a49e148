//! Contact Book - a command-line contact manager.
//!
//! Stores named contacts with phone numbers and optional birthdays, persists
//! them to a local JSON file, and supports lookup, substring search and
//! paginated listing.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday, page size)
//! - **models**: The contact record
//! - **directory**: The keyed record collection with search and pagination
//! - **repositories**: Snapshot persistence of the directory
//! - **services**: Contact operations with write-through persistence
//! - **shell**: Command parsing, dispatch and the interactive loop
//! - **error**: Error types for each layer
//! - **config**: Configuration from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod shell;

pub use config::Config;
pub use directory::{Directory, Page, Pages};
pub use domain::{Birthday, Name, PageSize, Phone, ValidationError};
pub use error::{BookError, ConfigError, ServiceError, StorageError};
pub use models::Record;
pub use repositories::{DirectoryRepository, JsonFileRepository};
pub use services::{AddOutcome, ContactService};
pub use shell::{Command, CommandHandler};
