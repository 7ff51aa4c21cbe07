//! Command helper methods for Test.

use super::{Test, PASSPHRASE};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a lockbox command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG dirs pointing at the temporary home directory
    /// - config, vault and ledger paths inside the test directory
    /// - the test passphrase in `LOCKBOX_PASSPHRASE`
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("LOCKBOX_PASSPHRASE", PASSPHRASE);
        cmd
    }

    /// Like [`Test::cmd`] but without a passphrase in the environment.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("lockbox").expect("failed to find lockbox binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("XDG_DATA_HOME", self.home.path().join(".local/share"));
        cmd.env("LOCKBOX_CONFIG", self.config_path());
        cmd.env("LOCKBOX_VAULT", self.vault_path());
        cmd.env("LOCKBOX_LEDGER", self.ledger_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("LOCKBOX_PASSPHRASE");
        cmd.env_remove("LOCKBOX_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `lockbox add`, piping the password on stdin.
    pub fn add(&self, service: &str, username: &str, password: &str) -> Output {
        self.cmd()
            .args(["add", service, username])
            .write_stdin(format!("{}\n", password))
            .output()
            .expect("failed to run lockbox add")
    }

    /// Shortcut for `lockbox get` command.
    pub fn get(&self, service: &str) -> Output {
        self.cmd()
            .args(["get", service])
            .output()
            .expect("failed to run lockbox get")
    }

    /// Shortcut for `lockbox get --json` command.
    pub fn get_json(&self, service: &str) -> Output {
        self.cmd()
            .args(["get", service, "--json"])
            .output()
            .expect("failed to run lockbox get --json")
    }

    /// Shortcut for `lockbox list` command.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run lockbox list")
    }

    /// Shortcut for `lockbox list --json` command.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run lockbox list --json")
    }

    /// Shortcut for `lockbox tx add` command.
    pub fn tx_add(&self, kind: &str, amount: &str, category: &str) -> Output {
        self.cmd()
            .args(["tx", "add", kind, amount, category])
            .output()
            .expect("failed to run lockbox tx add")
    }

    /// Shortcut for `lockbox tx list --json` with extra filter arguments.
    pub fn tx_list_json(&self, filters: &[&str]) -> Output {
        self.cmd()
            .args(["tx", "list", "--json"])
            .args(filters)
            .output()
            .expect("failed to run lockbox tx list --json")
    }
}
