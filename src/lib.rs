//! Contact Directory - an in-memory contact directory with validated phone numbers.
//!
//! This library models a contact's name and its mutable, ordered set of
//! phone numbers, and provides a keyed collection of contacts supporting
//! insertion, lookup, and deletion. Phone numbers are validated at
//! construction time (exactly 10 ASCII digits, no normalization); malformed
//! input is the only hard error, while absent targets (removing a phone or
//! deleting a contact that isn't there) are ordinary, queryable outcomes.
//!
//! # Architecture
//!
//! - **domain**: Type-safe value objects for contact names and phone numbers
//! - **record**: A contact record aggregating a name and its phone sequence
//! - **directory**: The name-keyed collection of records
//!
//! # Example
//!
//! ```
//! use contact_directory::{ContactDirectory, ContactRecord};
//!
//! let mut directory = ContactDirectory::new();
//!
//! let mut john = ContactRecord::new("John");
//! john.add_phone("1234567890")?;
//! john.add_phone("5555555555")?;
//! directory.add_record(john);
//!
//! let john = directory.find_mut("John").expect("just added");
//! john.edit_phone("1234567890", "1112223333")?;
//! assert_eq!(
//!     john.to_string(),
//!     "Contact name: John, phones: 1112223333; 5555555555"
//! );
//! # Ok::<(), contact_directory::ValidationError>(())
//! ```

// Re-export commonly used types
pub mod directory;
pub mod domain;
pub mod record;

pub use directory::ContactDirectory;
pub use domain::{ContactName, PhoneNumber, ValidationError, ValidationResult};
pub use record::ContactRecord;
