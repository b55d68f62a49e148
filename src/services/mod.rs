//! Application service layer.
//!
//! Services hold the business logic between the command layer and the
//! directory, and decide when the directory is written back to storage.

mod contact_service;

pub use contact_service::{AddOutcome, ContactService, GENERATED_CONTACTS};
