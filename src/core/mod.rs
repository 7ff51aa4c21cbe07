//! Core library components.
//!
//! This module contains the reusable logic: key derivation, the Fernet
//! cipher, record encoding, the encrypted store, and the vault and book
//! built on top of it.

pub mod book;
pub mod cipher;
pub mod codec;
pub mod config;
pub mod constants;
pub mod domain;
pub mod generator;
pub mod kdf;
pub mod store;
pub mod types;
pub mod vault;
