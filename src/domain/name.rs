//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// The name is the record's identity within a directory. Unlike phone
/// numbers it carries no structural constraint (the empty string is
/// permitted), so construction is infallible. The value is set once and
/// never mutated; a directory keyed by it can rely on the key staying
/// equal to the name.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactName;
///
/// let name = ContactName::new("John");
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_holds_value() {
        let name = ContactName::new("John");
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_permits_empty() {
        let name = ContactName::new("");
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn test_name_display() {
        let name = ContactName::new("Jane Doe");
        assert_eq!(format!("{}", name), "Jane Doe");
    }

    #[test]
    fn test_name_serialization() {
        let name = ContactName::new("John");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"John\"");
    }

    #[test]
    fn test_name_deserialization() {
        let name: ContactName = serde_json::from_str("\"John\"").unwrap();
        assert_eq!(name.as_str(), "John");
    }
}
