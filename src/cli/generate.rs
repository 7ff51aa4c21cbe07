//! Generate command.
//!
//! Prints a random password without touching any store.

use crate::cli::context::Context;
use crate::core::generator::Generator;
use crate::error::Result;

/// Generator from config defaults, overridden by flags.
pub fn resolve(ctx: &Context, length: Option<usize>, no_symbols: bool) -> Generator {
    let mut generator = ctx.settings.generator();
    if let Some(length) = length {
        generator.length = length;
    }
    if no_symbols {
        generator.symbols = false;
    }
    generator
}

/// Print a generated password to stdout.
pub fn execute(ctx: &Context, length: Option<usize>, no_symbols: bool) -> Result<()> {
    let password = resolve(ctx, length, no_symbols).generate()?;
    println!("{}", password.as_str());
    Ok(())
}
