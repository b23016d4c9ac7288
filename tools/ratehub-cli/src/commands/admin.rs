//! Aggregate statistics and user administration commands.

use anyhow::Result;
use console::style;
use ratehub_core::Statistics;
use ratehub_router::Destination;

use crate::context::Context;

/// Show aggregate platform statistics.
pub fn stats(ctx: &Context) -> Result<()> {
    ctx.authorize(Destination::Dashboard)?;

    let stores = ctx.stores()?;
    let statistics = Statistics::collect(ctx.sessions.identity_count()?, &stores);

    if ctx.output.is_json() {
        ctx.output.json_value(&statistics);
        return Ok(());
    }

    ctx.output.header("Platform statistics");
    ctx.output.field("users", &statistics.total_users.to_string());
    ctx.output.field("stores", &statistics.total_stores.to_string());
    ctx.output.field("ratings", &statistics.total_ratings.to_string());
    Ok(())
}

/// List all identities. Admin only; the guard redirects everyone else.
pub fn users(ctx: &Context) -> Result<()> {
    ctx.authorize(Destination::Users)?;

    let identities = ctx.sessions.known_identities()?;

    if ctx.output.is_json() {
        ctx.output.json_value(&identities);
        return Ok(());
    }

    ctx.output.header(&format!("Users ({})", identities.len()));
    for identity in &identities {
        println!(
            "  {:<12} {:<28} {:<24} {}",
            style(identity.role.as_str()).cyan(),
            identity.name,
            identity.email,
            style(identity.id.as_str()).dim(),
        );
    }
    Ok(())
}
