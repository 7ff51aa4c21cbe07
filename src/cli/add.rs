//! Add command.
//!
//! Store a credential. The password is generated, read from a pipe, or
//! prompted for with hidden input.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::context::Context;
use crate::core::generator::Generator;
use crate::error::{Result, ValidationError};

/// Add a credential to the vault.
///
/// With `generate` set, or when the entered password is empty, the password
/// comes from `generator` and is printed once.
pub fn execute(
    ctx: &Context,
    service: &str,
    username: &str,
    generate: bool,
    generator: Generator,
) -> Result<()> {
    info!("Adding credential: {}", service);

    if service.trim().is_empty() {
        return Err(ValidationError::EmptyField("service").into());
    }

    // Generate before unlocking so a bad length fails fast
    let generated = if generate {
        Some(generator.generate()?)
    } else {
        None
    };

    let mut vault = ctx.open_vault()?;

    let (secret, shown) = match generated {
        Some(password) => (password, true),
        None => {
            let entered = read_secret(ctx, service)?;
            if entered.is_empty() {
                (generator.generate()?, true)
            } else {
                (entered, false)
            }
        }
    };

    vault.add(service, username, &secret)?;
    ctx.out.success(&format!("stored {}", ctx.out.service(service)));

    if shown {
        ctx.out.kv("password:", secret.as_str());
    }

    Ok(())
}

fn read_secret(ctx: &Context, service: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().read_line(&mut input)?;
        return Ok(Zeroizing::new(input.trim_end_matches(['\r', '\n']).to_string()));
    }

    let value = Password::new()
        .with_prompt(format!("Password for {} (empty to generate)", ctx.out.service(service)))
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(value))
}
