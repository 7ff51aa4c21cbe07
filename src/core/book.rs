//! Transaction book.
//!
//! The finance ledger counterpart of the vault: income and expense entries
//! kept in their own encrypted store.

use std::path::Path;

use chrono::Local;
use tracing::debug;

use crate::core::domain::{Filter, Transaction};
use crate::core::kdf::KdfParams;
use crate::core::store::EncryptedStore;
use crate::error::Result;

/// Encrypted list of transactions.
#[derive(Debug)]
pub struct Book {
    store: EncryptedStore<Transaction>,
}

impl Book {
    /// Open (or start) the book at `path`.
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

    /// Open the book, using `params` if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Same as [`Book::open`].
    pub fn open_with(path: impl AsRef<Path>, passphrase: &str, params: KdfParams) -> Result<Self> {
        Ok(Self {
            store: EncryptedStore::open_with(path, passphrase, params)?,
        })
    }

    pub fn store(&self) -> &EncryptedStore<Transaction> {
        &self.store
    }

    /// Record a transaction and save the book.
    ///
    /// # Errors
    ///
    /// Returns the save error; the transaction is not kept in that case.
    pub fn add(&mut self, transaction: Transaction) -> Result<&Transaction> {
        debug!(kind = %transaction.kind(), "adding transaction");
        self.store.append(transaction)
    }

    /// Transactions passing `filter`, oldest first, relative to the current
    /// local time.
    pub fn transactions(&self, filter: &Filter) -> Vec<&Transaction> {
        let now = Local::now().naive_local();
        self.store
            .records()
            .iter()
            .filter(|tx| filter.matches(tx, now))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
