//! Encrypted record store.
//!
//! Persists an ordered list of records to a single file: records are encoded
//! as JSON, encrypted with a key derived from the passphrase, and wrapped in
//! an [`Envelope`] that records the key derivation parameters.
//!
//! The in-memory list mirrors the file. It is replaced wholesale on open and
//! written out wholesale on every save; there is no incremental persistence
//! and no locking (the last writer wins).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::cipher::{Cipher, Fernet};
use crate::core::codec;
use crate::core::kdf::KdfParams;
use crate::error::Result;

mod envelope;
mod fs;

pub use envelope::Envelope;

/// A file-backed, passphrase-encrypted sequence of records.
pub struct EncryptedStore<R> {
    path: PathBuf,
    params: KdfParams,
    cipher: Fernet,
    records: Vec<R>,
}

impl<R> std::fmt::Debug for EncryptedStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptedStore")
            .field("path", &self.path)
            .field("params", &self.params)
            .field("records", &self.records.len())
            .finish()
    }
}

impl<R: Serialize + DeserializeOwned> EncryptedStore<R> {
    /// Open the store at `path`.
    ///
    /// If the file exists it is decrypted and decoded; otherwise the store
    /// starts empty under a fresh random salt. The file is not created until
    /// the first save.
    ///
    /// # Errors
    ///
    /// Returns an authentication error (`Error::is_authentication`) if the
    /// passphrase is wrong or the file was altered, `FormatError` if the
    /// contents are not a valid store, and `StoreError::Read` on IO failure.
    pub fn open(path: impl AsRef<Path>, passphrase: &str) -> Result<Self> {
        Self::open_with(path, passphrase, KdfParams::generate())
    }

    /// Open the store at `path`, using `params` if the file does not exist yet.
    ///
    /// An existing file always uses the parameters recorded in it.
    ///
    /// # Errors
    ///
    /// Same as [`EncryptedStore::open`].
    pub fn open_with(path: impl AsRef<Path>, passphrase: &str, params: KdfParams) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "opening store");

        let Some(bytes) = fs::read(&path)? else {
            info!(path = %path.display(), "no store file, starting empty");
            let cipher = Fernet::new(&params.derive(passphrase));
            return Ok(Self {
                path,
                params,
                cipher,
                records: Vec::new(),
            });
        };

        let envelope = Envelope::parse(&bytes)?;
        let params = envelope.params()?;
        if envelope.is_legacy() {
            info!(path = %path.display(), "reading legacy store format");
        }

        let cipher = Fernet::new(&params.derive(passphrase));
        let plaintext = zeroize::Zeroizing::new(cipher.decrypt(envelope.data())?);
        let records = codec::decode(&plaintext)?;

        debug!(records = records.len(), cipher = cipher.name(), "store loaded");

        Ok(Self {
            path,
            params,
            cipher,
            records,
        })
    }

    /// Encrypt all records and replace the store file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the file cannot be written; the
    /// previous file is left untouched in that case.
    pub fn save(&self) -> Result<()> {
        let plaintext = zeroize::Zeroizing::new(codec::encode(&self.records)?);
        let token = self.cipher.encrypt(&plaintext)?;
        let envelope = Envelope::new(&self.params, token);

        fs::write_atomic(&self.path, envelope.to_json()?.as_bytes())?;
        debug!(path = %self.path.display(), records = self.records.len(), "store saved");

        Ok(())
    }

    /// Append a record and save.
    ///
    /// If the save fails the record is dropped again, so memory keeps
    /// mirroring the file.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`EncryptedStore::save`].
    pub fn append(&mut self, record: R) -> Result<&R> {
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }
}

impl<R> EncryptedStore<R> {
    /// Records in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Key derivation parameters this store encrypts under.
    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
