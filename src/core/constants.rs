//! Constants used throughout lockbox.
//!
//! Centralizes file names, key derivation parameters and environment variable
//! names.

/// Directory name under the platform config/data directories.
pub const APP_DIR: &str = "lockbox";

/// Configuration file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Default credential store file name inside the data directory.
pub const VAULT_FILE: &str = "vault.json";

/// Default transaction store file name inside the data directory.
pub const LEDGER_FILE: &str = "ledger.json";

/// Envelope version written by this release.
pub const FORMAT_VERSION: u32 = 2;

/// Length of the derived key in bytes (16 signing + 16 encryption).
pub const KEY_LEN: usize = 32;

/// Length of a freshly generated per-store salt.
pub const SALT_LEN: usize = 16;

/// PBKDF2 iterations for newly created stores.
pub const DEFAULT_ITERATIONS: u32 = 600_000;

/// Lowest iteration count accepted from configuration.
pub const MIN_ITERATIONS: u32 = 100_000;

/// Salt of stores written before salts were persisted.
pub const LEGACY_SALT: &[u8] = b"salt_";

/// Iteration count of stores written before salts were persisted.
pub const LEGACY_ITERATIONS: u32 = 100_000;

/// Default generated password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Timestamp layout of transaction dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable holding the master passphrase.
pub const PASSPHRASE_ENV: &str = "LOCKBOX_PASSPHRASE";

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "LOCKBOX_CONFIG";

/// Environment variable overriding the credential store path.
pub const VAULT_ENV: &str = "LOCKBOX_VAULT";

/// Environment variable overriding the transaction store path.
pub const LEDGER_ENV: &str = "LOCKBOX_LEDGER";

/// Environment variable with the log filter.
pub const LOG_ENV: &str = "LOCKBOX_LOG";
