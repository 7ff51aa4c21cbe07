//! Passphrase resolution.
//!
//! `LOCKBOX_PASSPHRASE` wins; otherwise the user is prompted without echo.
//! A new store asks for the passphrase twice.

use std::io::IsTerminal;
use std::path::Path;

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::PASSPHRASE_ENV;
use crate::error::{Result, ValidationError};

/// Obtain the passphrase for the store at `path`.
///
/// # Errors
///
/// Returns `ValidationError::MissingPassphrase` when the variable is unset
/// and stdin is not a terminal, or a prompt error if the prompt fails.
pub fn resolve(path: &Path) -> Result<Zeroizing<String>> {
    if let Some(passphrase) = std::env::var(PASSPHRASE_ENV)
        .ok()
        .filter(|v| !v.is_empty())
    {
        debug!("passphrase taken from environment");
        return Ok(Zeroizing::new(passphrase));
    }

    if !std::io::stdin().is_terminal() {
        return Err(ValidationError::MissingPassphrase.into());
    }

    let mut prompt = Password::new().with_prompt("Master passphrase");
    if !path.exists() {
        prompt = prompt.with_confirmation("Confirm passphrase", "passphrases do not match");
    }

    Ok(Zeroizing::new(prompt.interact()?))
}
