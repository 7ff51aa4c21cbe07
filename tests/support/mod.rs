//! Test support utilities for lockbox integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own directory for store files and config, plus a
/// separate home dir. Paths reach the child process through environment
/// variables, so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory holding config and store files
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new environment with a fast-but-valid config file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        std::fs::write(dir.path().join("config.toml"), TEST_CONFIG)
            .expect("failed to write test config");

        Self { dir, home }
    }

    /// Create an environment with credentials already stored.
    pub fn with_credentials(credentials: &[(&str, &str, &str)]) -> Self {
        let t = Self::new();
        for (service, username, password) in credentials {
            let output = t.add(service, username, password);
            assert!(
                output.status.success(),
                "Failed to add {}: {}",
                service,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn vault_path(&self) -> PathBuf {
        self.dir.path().join("vault.json")
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.path().join("ledger.json")
    }
}
