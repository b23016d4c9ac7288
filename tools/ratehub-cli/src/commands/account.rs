//! Session and profile commands: whoami, logout, passwd.

use anyhow::{Context as _, Result};
use ratehub_core::validate::validate_password;
use ratehub_router::Destination;

use super::PasswdArgs;
use crate::context::Context;

/// Show the signed-in identity.
pub fn whoami(ctx: &Context) -> Result<()> {
    match ctx.sessions.current_identity() {
        Some(identity) => {
            if ctx.output.is_json() {
                ctx.output.json_value(&identity);
                return Ok(());
            }
            ctx.output.header(&identity.name);
            ctx.output.field("id", identity.id.as_str());
            ctx.output.field("email", &identity.email);
            ctx.output.field("role", identity.role.as_str());
            ctx.output.field("address", &identity.address);
            if let Some(store_id) = &identity.store_id {
                ctx.output.field("store", store_id.as_str());
            }
        }
        None => ctx.output.info("Not signed in."),
    }
    Ok(())
}

/// Erase the session. A no-op when already signed out.
pub fn logout(ctx: &Context) -> Result<()> {
    let was_signed_in = ctx.sessions.is_authenticated();
    ctx.sessions.logout()?;
    if was_signed_in {
        ctx.output.success("Signed out");
    } else {
        ctx.output.info("Already signed out.");
    }
    Ok(())
}

/// Change the signed-in identity's password.
pub fn passwd(args: PasswdArgs, ctx: &Context) -> Result<()> {
    ctx.authorize(Destination::Profile)?;

    let current = match args.current {
        Some(current) => current,
        None => dialoguer::Password::new()
            .with_prompt("Current password")
            .interact()
            .context("failed to read password")?,
    };
    let new = match args.new {
        Some(new) => new,
        None => dialoguer::Password::new()
            .with_prompt("New password")
            .with_confirmation("Confirm new password", "Passwords must match")
            .interact()
            .context("failed to read password")?,
    };

    validate_password(&new)?;

    let spinner = ctx.output.spinner("Updating password...");
    let result = ctx.sessions.change_password(&current, &new);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = result?;
    ctx.output.success(&outcome.message);
    Ok(())
}
