//! Get command.

use serde_json::json;

use crate::cli::context::Context;
use crate::error::{RecordError, Result};

/// Show the first credential stored for `service`.
pub fn execute(ctx: &Context, service: &str, json: bool) -> Result<()> {
    let vault = ctx.open_vault()?;

    let Some(record) = vault.find(service) else {
        let available = vault.list_services();
        return Err(RecordError::not_found_with_suggestions(service, &available).into());
    };

    if json {
        let value = json!({
            "service": record.service(),
            "username": record.username(),
            "password": record.secret(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    ctx.out.header(&ctx.out.service(record.service()));
    ctx.out.kv("username:", record.username());
    ctx.out.kv("password:", record.secret());
    Ok(())
}
