//! List command.

use crate::cli::context::Context;
use crate::error::Result;

/// List stored services in insertion order.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let vault = ctx.open_vault()?;
    let services = vault.list_services();

    if json {
        println!("{}", serde_json::to_string_pretty(&services)?);
        return Ok(());
    }

    if services.is_empty() {
        ctx.out.dimmed("no services stored");
        return Ok(());
    }

    ctx.out.header(&format!("{} services", services.len()));
    for service in services {
        ctx.out.list_item(&ctx.out.service(service));
    }
    Ok(())
}
