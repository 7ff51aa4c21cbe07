//! Vault.
//!
//! The credential manager: in-memory operations over the decoded record list,
//! persisting through the encrypted store on every mutation.

use std::path::Path;

use tracing::debug;

use crate::core::domain::Record;
use crate::core::kdf::KdfParams;
use crate::core::store::EncryptedStore;
use crate::error::Result;

/// The primary interface for credential operations.
///
/// Records are add-only: there is no update or delete. Services are not
/// unique; lookups return the first match in insertion order.
#[derive(Debug)]
pub struct Vault {
    store: EncryptedStore<Record>,
}

impl Vault {
    // --- Construction ---
    /// Open (or start) the vault at `path`.
    ///
    /// # Errors
    ///
    /// Returns an authentication error for a wrong passphrase, `FormatError`
    /// for a corrupt file, `StoreError` on IO failure.
    pub fn open(path: impl AsRef<Path>, passphrase: &str) -> Result<Self> {
        Ok(Self {
            store: EncryptedStore::open(path, passphrase)?,
        })
    }

    /// Open the vault, using `params` if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Same as [`Vault::open`].
    pub fn open_with(path: impl AsRef<Path>, passphrase: &str, params: KdfParams) -> Result<Self> {
        Ok(Self {
            store: EncryptedStore::open_with(path, passphrase, params)?,
        })
    }

    /// Underlying store.
    pub fn store(&self) -> &EncryptedStore<Record> {
        &self.store
    }

    // --- Records ---
    /// Add a credential and save the vault.
    ///
    /// No duplicate check is made.
    ///
    /// # Errors
    ///
    /// Returns the save error; the record is not kept in that case.
    pub fn add(&mut self, service: &str, username: &str, secret: &str) -> Result<&Record> {
        debug!(service, "adding record");
        self.store.append(Record::new(service, username, secret))
    }

    /// First record whose service matches case-insensitively.
    pub fn find(&self, service: &str) -> Option<&Record> {
        self.store.records().iter().find(|r| r.matches(service))
    }

    /// Service names in insertion order, duplicates included.
    pub fn list_services(&self) -> Vec<&str> {
        self.store.records().iter().map(Record::service).collect()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
