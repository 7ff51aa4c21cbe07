//! Configuration file management.
//!
//! Handles reading and validating `config.toml`. Every field is optional;
//! a missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::generator::Generator;
use crate::error::{ConfigError, Result};

/// User settings stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Credential store file
    pub vault_path: Option<PathBuf>,
    /// Transaction store file
    pub ledger_path: Option<PathBuf>,
    /// PBKDF2 iterations for stores created from now on
    pub iterations: u32,
    /// Password generator defaults
    pub generator: GeneratorSettings,
    /// Terminal output
    pub theme: ThemeSettings,
}

/// Password generator section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    pub length: usize,
    pub symbols: bool,
}

/// Theme section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_path: None,
            ledger_path: None,
            iterations: constants::DEFAULT_ITERATIONS,
            generator: GeneratorSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: constants::DEFAULT_PASSWORD_LENGTH,
            symbols: true,
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Settings {
    /// Default location: `<config dir>/lockbox/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoDirectory` if the platform has no config dir.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoDirectory("config"))?;
        Ok(dir.join(constants::APP_DIR).join(constants::CONFIG_FILE))
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };

        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        settings.validate()?;

        debug!(iterations = settings.iterations, "config loaded");
        Ok(settings)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.iterations < constants::MIN_ITERATIONS {
            return Err(ConfigError::InvalidValue {
                field: "iterations",
                reason: format!(
                    "{} is below the minimum of {}",
                    self.iterations,
                    constants::MIN_ITERATIONS
                ),
            }
            .into());
        }

        let minimum = self.generator().required_classes();
        if self.generator.length < minimum {
            return Err(ConfigError::InvalidValue {
                field: "generator.length",
                reason: format!("{} is below the minimum of {}", self.generator.length, minimum),
            }
            .into());
        }

        Ok(())
    }

    /// Credential store path, falling back to the data directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoDirectory` if no path is set and the platform
    /// has no data dir.
    pub fn vault_path(&self) -> Result<PathBuf> {
        match &self.vault_path {
            Some(path) => Ok(path.clone()),
            None => data_file(constants::VAULT_FILE),
        }
    }

    /// Transaction store path, falling back to the data directory.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::vault_path`].
    pub fn ledger_path(&self) -> Result<PathBuf> {
        match &self.ledger_path {
            Some(path) => Ok(path.clone()),
            None => data_file(constants::LEDGER_FILE),
        }
    }

    /// Generator configured with these defaults.
    pub fn generator(&self) -> Generator {
        Generator::new(self.generator.length, self.generator.symbols)
    }
}

fn data_file(name: &str) -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(ConfigError::NoDirectory("data"))?;
    Ok(dir.join(constants::APP_DIR).join(name))
}
