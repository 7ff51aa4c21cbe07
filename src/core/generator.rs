//! Password generation.
//!
//! Draws characters uniformly from the OS RNG and retries until every
//! required character class is present.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_PASSWORD_LENGTH;
use crate::error::{Result, ValidationError};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Random password generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    pub length: usize,
    pub symbols: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            symbols: true,
        }
    }
}

impl Generator {
    pub fn new(length: usize, symbols: bool) -> Self {
        Self { length, symbols }
    }

    /// Number of character classes every password must contain.
    pub fn required_classes(&self) -> usize {
        if self.symbols {
            4
        } else {
            3
        }
    }

    /// Generate a password.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PasswordLength` if the length cannot fit one
    /// character of every required class.
    pub fn generate(&self) -> Result<Zeroizing<String>> {
        let minimum = self.required_classes();
        if self.length < minimum {
            return Err(ValidationError::PasswordLength {
                length: self.length,
                minimum,
            }
            .into());
        }

        let mut alphabet: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS].concat();
        if self.symbols {
            alphabet.extend_from_slice(SYMBOLS);
        }

        loop {
            let password: Zeroizing<String> = Zeroizing::new(
                (0..self.length)
                    .filter_map(|_| alphabet.choose(&mut OsRng).map(|&b| char::from(b)))
                    .collect(),
            );
            if self.is_acceptable(&password) {
                return Ok(password);
            }
        }
    }

    fn is_acceptable(&self, password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && (!self.symbols || password.chars().any(|c| c.is_ascii_punctuation()))
    }
}
