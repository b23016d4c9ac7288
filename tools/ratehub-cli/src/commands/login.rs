//! Sign-in command.

use anyhow::{Context as _, Result};

use super::LoginArgs;
use crate::context::Context;

/// Run the login command.
pub fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .context("failed to read password")?,
    };

    let spinner = ctx.output.spinner("Signing in...");
    let result = ctx.sessions.login(&args.email, &password);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let identity = result?;

    if ctx.output.is_json() {
        ctx.output.json_value(&identity);
        return Ok(());
    }

    ctx.output
        .success(&format!("Signed in as {} ({})", identity.name, identity.role));
    Ok(())
}
