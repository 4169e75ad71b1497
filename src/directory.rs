//! Contact directory: records keyed by contact name.

use crate::record::ContactRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A collection of contact records keyed by contact name.
///
/// The directory owns a map internally rather than extending one, so the
/// key invariant (every key equals its record's name) can only be reached
/// through [`add_record`](Self::add_record), [`find`](Self::find) /
/// [`find_mut`](Self::find_mut), and [`delete`](Self::delete). Records are
/// mutated through their own methods after lookup; the directory never
/// reaches into a record's internals.
///
/// # Example
///
/// ```
/// use contact_directory::{ContactDirectory, ContactRecord};
///
/// let mut directory = ContactDirectory::new();
/// let mut record = ContactRecord::new("John");
/// record.add_phone("1234567890")?;
/// directory.add_record(record);
///
/// assert!(directory.find("John").is_some());
/// assert!(directory.delete("John"));
/// assert!(!directory.delete("John"));
/// # Ok::<(), contact_directory::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: HashMap<String, ContactRecord>,
}

impl ContactDirectory {
    /// Create a new, empty directory.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert a record, keyed by its name.
    ///
    /// An existing record under the same name is silently replaced; this
    /// is plain key-overwrite semantics, not a guarded upsert.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().as_str().to_owned();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!(name = %name, "existing record replaced");
        } else {
            tracing::debug!(name = %name, "record added");
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    ///
    /// The handle allows phone edits only; the record's name has no
    /// mutator, so the entry's key cannot drift from its record.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns `true` if a record was removed, `false` if the name was
    /// absent.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.records.remove(name) {
            Some(_) => {
                tracing::debug!(name = %name, "record deleted");
                true
            }
            None => {
                tracing::trace!(name = %name, "record absent, nothing deleted");
                false
            }
        }
    }

    /// Number of records in the directory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContactRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }
}

// Serde support - serialize as a plain name-to-record map
impl Serialize for ContactDirectory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

// Serde support - deserialize by re-inserting every record, so keys are
// rebuilt from record names and the key invariant holds whatever the
// input map claimed
impl<'de> Deserialize<'de> for ContactDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = HashMap::<String, ContactRecord>::deserialize(deserializer)?;
        let mut directory = ContactDirectory::new();
        for (_, record) in records {
            directory.add_record(record);
        }
        Ok(directory)
    }
}
