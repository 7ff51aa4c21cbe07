//! Cryptographic operations.
//!
//! Provides the encryption/decryption abstraction the store is written
//! against, and its Fernet implementation.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;

mod fernet;

pub use fernet::Fernet;

/// Authenticated symmetric cipher.
///
/// Implementations must detect a wrong key or an altered ciphertext and
/// report it as `CipherError::Authentication` instead of returning garbage.
pub trait Cipher {
    /// Encrypt a payload into a text token.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &[u8]) -> Result<String>;

    /// Decrypt a token produced by `encrypt`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Authentication` if the key is wrong or the token
    /// was altered, `CipherError::MalformedToken` if it is not a token at all.
    fn decrypt(&self, token: &str) -> Result<Vec<u8>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}
