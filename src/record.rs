//! Contact record: a name plus its ordered phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: an identifying name and an ordered sequence of
/// validated phone numbers.
///
/// The name is set at construction and cannot be reassigned, which is what
/// lets [`ContactDirectory`](crate::ContactDirectory) key records by name
/// without ever re-keying. Phones keep insertion order and duplicates are
/// permitted; all mutation goes through the record's own methods.
///
/// # Example
///
/// ```
/// use contact_directory::ContactRecord;
///
/// let mut record = ContactRecord::new("John");
/// record.add_phone("1234567890")?;
/// record.add_phone("5555555555")?;
/// assert_eq!(
///     record.to_string(),
///     "Contact name: John, phones: 1234567890; 5555555555"
/// );
/// # Ok::<(), contact_directory::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Identifying name, immutable after construction
    name: ContactName,

    /// Phone numbers in insertion order
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a new record with the given name and no phone numbers.
    ///
    /// Names carry no constraint, so this always succeeds.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Number of phone numbers on this record.
    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    /// Validate `phone` and append it to the end of the sequence.
    ///
    /// Duplicates are permitted and not collapsed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not exactly
    /// 10 digits; the sequence is unchanged in that case.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone number equal to `phone`.
    ///
    /// Later duplicates are untouched. Removing a number that is not
    /// present is a silent no-op, not an error.
    pub fn remove_phone(&mut self, phone: &str) {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(idx) => {
                self.phones.remove(idx);
                tracing::debug!(name = %self.name, phone = %phone, "phone removed");
            }
            None => {
                tracing::trace!(name = %self.name, phone = %phone, "phone absent, nothing removed");
            }
        }
    }

    /// Replace the first phone number equal to `old_phone` with `new_phone`,
    /// preserving its position in the sequence.
    ///
    /// `new_phone` is validated before the slot is touched, so a failed
    /// edit leaves the sequence exactly as it was. Editing a number that is
    /// not present is a silent no-op (the replacement is never validated in
    /// that case).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `old_phone` is present
    /// and `new_phone` is not exactly 10 digits.
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: impl Into<String>,
    ) -> Result<(), ValidationError> {
        match self.phones.iter().position(|p| p.as_str() == old_phone) {
            Some(idx) => {
                let new_phone = PhoneNumber::new(new_phone)?;
                tracing::debug!(
                    name = %self.name,
                    old = %old_phone,
                    new = %new_phone,
                    "phone edited"
                );
                self.phones[idx] = new_phone;
                Ok(())
            }
            None => {
                tracing::trace!(name = %self.name, phone = %old_phone, "phone absent, nothing edited");
                Ok(())
            }
        }
    }

    /// Find the first phone number equal to `phone`.
    ///
    /// Returns `None` if no phone matches.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

// Display support: "Contact name: <name>, phones: <p1>; <p2>"
impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = ContactRecord::new("John");
        assert_eq!(record.name().as_str(), "John");
        assert_eq!(record.phone_count(), 0);
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_record_add_and_find_phone() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        assert_eq!(record.phone_count(), 1);
        let found = record.find_phone("1234567890").unwrap();
        assert_eq!(found.as_str(), "1234567890");
        assert!(record.find_phone("9999999999").is_none());
    }

    #[test]
    fn test_record_add_invalid_phone_leaves_record_unchanged() {
        let mut record = ContactRecord::new("John");
        assert!(record.add_phone("12345").is_err());
        assert_eq!(record.phone_count(), 0);
    }

    #[test]
    fn test_record_permits_duplicate_phones() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phone_count(), 2);
    }

    #[test]
    fn test_record_remove_phone() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();

        record.remove_phone("1234567890");
        assert_eq!(record.phone_count(), 1);
        assert!(record.find_phone("1234567890").is_none());
        assert!(record.find_phone("5555555555").is_some());
    }

    #[test]
    fn test_record_remove_phone_first_duplicate_only() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        record.remove_phone("1234567890");
        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["5555555555", "1234567890"]);
    }

    #[test]
    fn test_record_remove_absent_phone_is_noop() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        record.remove_phone("9999999999");
        assert_eq!(record.phone_count(), 1);
    }

    #[test]
    fn test_record_edit_phone_preserves_position() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("9876543210").unwrap();

        record.edit_phone("5555555555", "1112223333").unwrap();
        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1234567890", "1112223333", "9876543210"]);
    }

    #[test]
    fn test_record_edit_phone_invalid_replacement_is_atomic() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        let result = record.edit_phone("1234567890", "bad");
        assert!(result.is_err());
        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1234567890"]);
    }

    #[test]
    fn test_record_edit_absent_phone_is_noop() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        // Absent target short-circuits before the replacement is validated
        assert!(record.edit_phone("9999999999", "not a phone").is_ok());
        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1234567890"]);
    }

    #[test]
    fn test_record_edit_first_duplicate_only() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();

        record.edit_phone("1234567890", "1112223333").unwrap();
        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1112223333", "1234567890"]);
    }

    #[test]
    fn test_record_display() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1112223333").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn test_record_display_no_phones() {
        let record = ContactRecord::new("John");
        assert_eq!(record.to_string(), "Contact name: John, phones: ");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"John","phones":["12345"]}"#;
        let result: Result<ContactRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
