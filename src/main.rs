//! Lockbox - a passphrase-encrypted local record store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lockbox::cli::output::{Output, Theme};
use lockbox::cli::{execute, Cli};
use lockbox::core::constants::LOG_ENV;
use lockbox::error::{Error, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("lockbox=debug")
        } else {
            EnvFilter::new("lockbox=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    let out = Output::new(Theme::detect(true, cli.no_color));

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            e if e.is_authentication() => Some("check your passphrase"),
            e if e.is_format() => Some("the store file may be corrupt; restore it from a backup"),
            Error::Validation(ValidationError::MissingPassphrase) => {
                Some("set LOCKBOX_PASSPHRASE or run from a terminal")
            }
            Error::Validation(ValidationError::PasswordLength { .. }) => {
                Some("use a longer --length")
            }
            _ => None,
        };

        out.error(&e.to_string());
        if let Some(hint) = suggestion {
            out.hint(hint);
        }
        std::process::exit(1);
    }
}
