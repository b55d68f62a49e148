//! Validated field types.
//!
//! Every contact attribute is a value object that checks its format at
//! construction time and again on reassignment, so a `Record` can never hold
//! a malformed name, phone number or birthday.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod page_size;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use page_size::PageSize;
pub use phone::Phone;
