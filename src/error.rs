//! Error types.
//!
//! One top-level [`Error`] with a sub-enum per domain, mirroring how the
//! store layers fail: the cipher cannot authenticate, the decoded bytes are
//! not records, the file cannot be read or written.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the store could not be unlocked: wrong passphrase or a
    /// ciphertext that does not verify.
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            Error::Cipher(CipherError::Authentication | CipherError::MalformedToken(_))
        )
    }

    /// True when decrypted or on-disk content is not a valid encoding.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

/// Symmetric cipher failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("authentication failed: wrong passphrase or tampered data")]
    Authentication,

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// Encoding failures for records and the on-disk envelope.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("invalid store file: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("invalid record data: {0}")]
    Records(#[source] serde_json::Error),

    #[error("decrypted data is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("unsupported store version: {0}")]
    UnsupportedVersion(u32),

    #[error("invalid key derivation parameters: {0}")]
    KdfParams(String),
}

/// Store file IO failures, tagged with the path involved.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration loading and validation failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("cannot determine {0} directory")]
    NoDirectory(&'static str),
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("password length {length} is too short (minimum {minimum})")]
    PasswordLength { length: usize, minimum: usize },

    #[error("invalid amount: {0}")]
    Amount(String),

    #[error("invalid transaction type: {0} (expected income or expense)")]
    Kind(String),

    #[error("no passphrase available: set LOCKBOX_PASSPHRASE or run interactively")]
    MissingPassphrase,
}

/// Record lookup failures.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("no entry found for '{service}'{}", format_suggestions(.suggestions))]
    NotFound {
        service: String,
        suggestions: Vec<String>,
    },
}

impl RecordError {
    /// Build a not-found error, suggesting stored services that look close
    /// to the one requested.
    pub fn not_found_with_suggestions(service: &str, available: &[&str]) -> Self {
        let needle = service.to_lowercase();
        let mut suggestions: Vec<String> = Vec::new();
        for candidate in available {
            let lower = candidate.to_lowercase();
            let close = !needle.is_empty()
                && (lower.contains(&needle) || needle.contains(&lower) || shares_prefix(&lower, &needle));
            if close && !suggestions.iter().any(|s| s == candidate) {
                suggestions.push((*candidate).to_string());
            }
        }
        RecordError::NotFound {
            service: service.to_string(),
            suggestions,
        }
    }
}

fn shares_prefix(a: &str, b: &str) -> bool {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count() >= 3
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
