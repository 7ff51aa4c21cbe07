//! Command-line interface.

pub mod add;
pub mod completions;
pub mod context;
pub mod generate;
pub mod get;
pub mod list;
pub mod output;
pub mod passphrase;
pub mod tx;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::{CONFIG_ENV, LEDGER_ENV, VAULT_ENV};
use crate::core::domain::Kind;
use crate::error::Result;

use self::context::Context;

/// Lockbox - passwords and finances in one encrypted file each.
#[derive(Parser)]
#[command(
    name = "lockbox",
    about = "A passphrase-encrypted store for credentials and transactions",
    version
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config.toml
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Credential store file
    #[arg(long, global = true, env = VAULT_ENV)]
    pub vault: Option<PathBuf>,

    /// Transaction store file
    #[arg(long, global = true, env = LEDGER_ENV)]
    pub ledger: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Store a credential
    Add {
        /// Service name (e.g., github)
        service: String,
        /// Account username
        username: String,
        /// Generate the password instead of reading it
        #[arg(short, long)]
        generate: bool,
        /// Generated password length
        #[arg(long)]
        length: Option<usize>,
        /// Leave symbols out of the generated password
        #[arg(long)]
        no_symbols: bool,
    },

    /// Show the credential for a service
    Get {
        /// Service name, matched case-insensitively
        service: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List stored services
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a random password
    Generate {
        /// Password length
        #[arg(long)]
        length: Option<usize>,
        /// Leave symbols out
        #[arg(long)]
        no_symbols: bool,
    },

    /// Record and review income and expenses
    Tx {
        #[command(subcommand)]
        action: TxAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Transaction subcommands.
#[derive(Subcommand)]
pub enum TxAction {
    /// Record a transaction
    Add {
        /// income or expense
        kind: Kind,
        /// Positive amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category (e.g., groceries)
        category: String,
        /// Free-form note
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List transactions
    List {
        /// Only income or only expense
        #[arg(long)]
        kind: Option<Kind>,
        /// Only this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,
        /// Only the last N days
        #[arg(long)]
        days: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    if let Completions { shell } = &cli.command {
        return completions::execute(shell.clone());
    }

    let ctx = Context::load(&cli)?;

    match cli.command {
        Add {
            service,
            username,
            generate: generated,
            length,
            no_symbols,
        } => {
            let generator = generate::resolve(&ctx, length, no_symbols);
            add::execute(&ctx, &service, &username, generated, generator)
        }
        Get { service, json } => get::execute(&ctx, &service, json),
        List { json } => list::execute(&ctx, json),
        Generate { length, no_symbols } => generate::execute(&ctx, length, no_symbols),
        Tx { action } => match action {
            TxAction::Add {
                kind,
                amount,
                category,
                description,
            } => tx::add(&ctx, kind, amount, &category, &description),
            TxAction::List {
                kind,
                category,
                days,
                json,
            } => tx::list(&ctx, kind, category, days, json),
        },
        Completions { .. } => Ok(()),
    }
}
