//! Contact Book - a minimal in-memory contact book with validated phone numbers.
//!
//! Records pair a contact name with an insertion-ordered list of phone
//! numbers, and live in a name-keyed address book. Phone numbers are
//! validated at construction (exactly 10 digits), so invalid data never
//! enters a record. There is no persistence and no concurrency; the whole
//! book lives in the memory of the owning caller.
//!
//! # Architecture
//!
//! - **domain**: Value objects for contact names and phone numbers
//! - **models**: The `Record` contact entry and its phone operations
//! - **store**: The `AddressBook` mapping from name to record
//! - **error**: Custom error types for precise error handling
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut john = Record::new("John");
//! john.add_phone("1234567890")?;
//! book.add_record(john);
//!
//! assert!(book.find("John").is_some());
//! # Ok::<(), contact_book::BookError>(())
//! ```

// Re-export commonly used types
pub mod domain;
pub mod error;
pub mod models;
pub mod store;

pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult};
pub use models::Record;
pub use store::AddressBook;
