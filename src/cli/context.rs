//! Per-invocation context.
//!
//! Resolves settings and store paths once, then opens stores on demand.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::output::{Output, Theme};
use crate::cli::{passphrase, Cli};
use crate::core::book::Book;
use crate::core::config::Settings;
use crate::core::kdf::KdfParams;
use crate::core::vault::Vault;
use crate::error::{Result, StoreError};

/// Settings, paths and output for one command.
#[derive(Debug)]
pub struct Context {
    pub settings: Settings,
    pub vault_path: PathBuf,
    pub ledger_path: PathBuf,
    pub out: Output,
}

impl Context {
    /// Build the context from global flags and the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file is invalid or no default
    /// directory exists for an unset path.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Settings::default_path()?,
        };
        let settings = Settings::load(&config_path)?;

        let vault_path = match &cli.vault {
            Some(path) => path.clone(),
            None => settings.vault_path()?,
        };
        let ledger_path = match &cli.ledger {
            Some(path) => path.clone(),
            None => settings.ledger_path()?,
        };

        let out = Output::new(Theme::detect(settings.theme.color, cli.no_color));

        debug!(
            vault = %vault_path.display(),
            ledger = %ledger_path.display(),
            "context resolved"
        );

        Ok(Self {
            settings,
            vault_path,
            ledger_path,
            out,
        })
    }

    /// Unlock the credential vault.
    ///
    /// # Errors
    ///
    /// Propagates passphrase, authentication, format and IO errors.
    pub fn open_vault(&self) -> Result<Vault> {
        prepare_parent(&self.vault_path)?;
        let passphrase = passphrase::resolve(&self.vault_path)?;
        Vault::open_with(&self.vault_path, &passphrase, self.new_store_params())
    }

    /// Unlock the transaction book.
    ///
    /// # Errors
    ///
    /// Propagates passphrase, authentication, format and IO errors.
    pub fn open_book(&self) -> Result<Book> {
        prepare_parent(&self.ledger_path)?;
        let passphrase = passphrase::resolve(&self.ledger_path)?;
        Book::open_with(&self.ledger_path, &passphrase, self.new_store_params())
    }

    fn new_store_params(&self) -> KdfParams {
        KdfParams::generate_with_iterations(self.settings.iterations)
    }
}

/// Create the directory of a store that does not exist yet.
fn prepare_parent(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
            Ok(())
        }
        _ => Ok(()),
    }
}
