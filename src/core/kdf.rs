//! Key derivation.
//!
//! Stretches a passphrase into the 32-byte key consumed by the Fernet
//! cipher, using PBKDF2-HMAC-SHA256.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use tracing::trace;
use zeroize::{Zeroizing, ZeroizeOnDrop};

use crate::core::constants::{
    DEFAULT_ITERATIONS, KEY_LEN, LEGACY_ITERATIONS, LEGACY_SALT, SALT_LEN,
};
use crate::error::{FormatError, Result};

/// A key derived from a passphrase.
///
/// Zeroized on drop; `Debug` never prints the bytes.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// URL-safe base64 form, the representation Fernet keys are exchanged in.
    pub fn encoded(&self) -> Zeroizing<String> {
        Zeroizing::new(URL_SAFE.encode(self.bytes))
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Salt and iteration count used to derive a store's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    salt: Vec<u8>,
    iterations: u32,
}

impl KdfParams {
    /// Parameters with an explicit salt and iteration count.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::KdfParams` if `iterations` is zero.
    pub fn new(salt: Vec<u8>, iterations: u32) -> Result<Self> {
        if iterations == 0 {
            return Err(FormatError::KdfParams("iterations must be non-zero".into()).into());
        }
        Ok(Self { salt, iterations })
    }

    /// Fresh random salt with the default iteration count.
    pub fn generate() -> Self {
        Self::generate_with_iterations(DEFAULT_ITERATIONS)
    }

    /// Fresh random salt with a caller-chosen iteration count.
    ///
    /// A zero count is raised to one.
    pub fn generate_with_iterations(iterations: u32) -> Self {
        let mut salt = vec![0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        Self {
            salt,
            iterations: iterations.max(1),
        }
    }

    /// The fixed parameters of stores written without a persisted salt.
    pub fn legacy() -> Self {
        Self {
            salt: LEGACY_SALT.to_vec(),
            iterations: LEGACY_ITERATIONS,
        }
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive the key for `passphrase` under these parameters.
    pub fn derive(&self, passphrase: &str) -> DerivedKey {
        derive(passphrase, &self.salt, self.iterations)
    }
}

/// Derive a key with PBKDF2-HMAC-SHA256.
///
/// Deterministic: the same passphrase, salt and iteration count always give
/// the same key. Any passphrase is accepted, including the empty one.
pub fn derive(passphrase: &str, salt: &[u8], iterations: u32) -> DerivedKey {
    trace!(salt_len = salt.len(), iterations, "deriving key");

    let mut bytes = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, iterations, &mut bytes);
    let key = DerivedKey::from_bytes(bytes);
    zeroize::Zeroize::zeroize(&mut bytes);
    key
}
