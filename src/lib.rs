//! Lockbox - a passphrase-encrypted local record store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── add           # Store a credential
//! │   ├── get / list    # Look up credentials
//! │   ├── generate      # Password generator
//! │   ├── tx            # Income / expense ledger
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── kdf           # PBKDF2 key derivation
//!     ├── cipher/       # Cipher trait + Fernet
//!     ├── codec         # JSON record encoding
//!     ├── store/        # Encrypted file store + envelope
//!     ├── vault         # Credential manager
//!     ├── book          # Transaction manager
//!     ├── generator     # Password generation
//!     └── config        # config.toml settings
//! ```
//!
//! # Example
//!
//! ```no_run
//! use lockbox::Vault;
//!
//! let mut vault = Vault::open("vault.json", "correct horse battery staple")?;
//! vault.add("github", "alice", "s3cret")?;
//! assert_eq!(vault.find("GitHub").map(|r| r.secret()), Some("s3cret"));
//! # Ok::<(), lockbox::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::book::Book;
pub use crate::core::domain::{Filter, Kind, Record, Transaction};
pub use crate::core::kdf::{derive, DerivedKey, KdfParams};
pub use crate::core::store::EncryptedStore;
pub use crate::core::vault::Vault;
pub use crate::error::{Error, Result};
