// SPDX-License-Identifier: MPL-2.0
//! Vault storage port definition.
//!
//! The vault keeps archive records (and optionally a remembered password)
//! in private local storage. Durability is the adapter's concern.

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors raised by a [`VaultStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// No record exists for the given identifier.
    NotFound(String),
    /// The underlying storage failed.
    Storage(String),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::NotFound(id) => write!(f, "Archive not found: {id}"),
            VaultError::Storage(msg) => write!(f, "Vault storage error: {msg}"),
        }
    }
}

impl std::error::Error for VaultError {}

/// Metadata of one archive kept in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRecord {
    id: String,
    name: String,
    size_bytes: u64,
    date_added_ms: u64,
    location: PathBuf,
    cached_password: Option<String>,
}

impl ArchiveRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        location: impl Into<PathBuf>,
        size_bytes: u64,
        date_added_ms: u64,
    ) -> Self {
        let location = location.into();
        let name = location
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            id: id.into(),
            name,
            size_bytes,
            date_added_ms,
            location,
            cached_password: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn date_added_ms(&self) -> u64 {
        self.date_added_ms
    }

    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    #[must_use]
    pub fn cached_password(&self) -> Option<&str> {
        self.cached_password.as_deref()
    }

    pub fn set_cached_password(&mut self, password: Option<String>) {
        self.cached_password = password;
    }

    /// Human-readable archive kind derived from the file extension.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        kind_label(&self.name)
    }
}

/// Maps an archive file name to its display label.
#[must_use]
pub fn kind_label(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("zip") => "ZIP Archive",
        Some("rar") => "RAR Archive",
        Some("7z") => "7-Zip Archive",
        _ => "Archive",
    }
}

/// Port for the private archive store.
pub trait VaultStore {
    /// Stores or replaces a record.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Storage`] if the record cannot be written.
    fn save(&mut self, record: ArchiveRecord) -> Result<(), VaultError>;

    /// Lists all records, most recently added first.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Storage`] if the store cannot be read.
    fn list(&self) -> Result<Vec<ArchiveRecord>, VaultError>;

    /// Fetches one record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::NotFound`] for unknown identifiers.
    fn get(&self, id: &str) -> Result<ArchiveRecord, VaultError>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::NotFound`] for unknown identifiers.
    fn delete(&mut self, id: &str) -> Result<(), VaultError>;

    /// Remembers (or forgets, with `None`) the password of a record.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::NotFound`] for unknown identifiers.
    fn cache_password(&mut self, id: &str, password: Option<String>) -> Result<(), VaultError> {
        let mut record = self.get(id)?;
        record.set_cached_password(password);
        self.save(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapVault {
        records: HashMap<String, ArchiveRecord>,
    }

    impl VaultStore for MapVault {
        fn save(&mut self, record: ArchiveRecord) -> Result<(), VaultError> {
            self.records.insert(record.id().to_string(), record);
            Ok(())
        }

        fn list(&self) -> Result<Vec<ArchiveRecord>, VaultError> {
            let mut all: Vec<_> = self.records.values().cloned().collect();
            all.sort_by(|a, b| b.date_added_ms().cmp(&a.date_added_ms()));
            Ok(all)
        }

        fn get(&self, id: &str) -> Result<ArchiveRecord, VaultError> {
            self.records
                .get(id)
                .cloned()
                .ok_or_else(|| VaultError::NotFound(id.to_string()))
        }

        fn delete(&mut self, id: &str) -> Result<(), VaultError> {
            self.records
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| VaultError::NotFound(id.to_string()))
        }
    }

    #[test]
    fn kind_label_matches_extension() {
        assert_eq!(kind_label("holiday.ZIP"), "ZIP Archive");
        assert_eq!(kind_label("scans.rar"), "RAR Archive");
        assert_eq!(kind_label("backup.7z"), "7-Zip Archive");
        assert_eq!(kind_label("photos"), "Archive");
    }

    #[test]
    fn record_name_comes_from_location() {
        let record = ArchiveRecord::new("a1", "/vault/photos.zip", 1024, 5);
        assert_eq!(record.name(), "photos.zip");
        assert_eq!(record.kind_label(), "ZIP Archive");
        assert!(record.cached_password().is_none());
    }

    #[test]
    fn cache_password_updates_stored_record() {
        let mut vault = MapVault::default();
        vault
            .save(ArchiveRecord::new("a1", "/vault/a.zip", 1, 1))
            .expect("save");
        vault
            .cache_password("a1", Some("hunter2".into()))
            .expect("cache");
        assert_eq!(
            vault.get("a1").expect("get").cached_password(),
            Some("hunter2")
        );
        assert_eq!(
            vault.cache_password("missing", None),
            Err(VaultError::NotFound("missing".into()))
        );
    }

    #[test]
    fn list_is_most_recent_first() {
        let mut vault = MapVault::default();
        vault.save(ArchiveRecord::new("old", "/v/old.zip", 1, 10)).expect("save");
        vault.save(ArchiveRecord::new("new", "/v/new.zip", 1, 20)).expect("save");
        let ids: Vec<_> = vault
            .list()
            .expect("list")
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        assert_eq!(ids, ["new", "old"]);
        vault.delete("old").expect("delete");
        assert!(vault.get("old").is_err());
    }
}
