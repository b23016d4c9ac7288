//! Registration command.

use anyhow::{Context as _, Result};
use ratehub_auth::NewIdentity;
use ratehub_core::{validate_registration, Registration};

use super::RegisterArgs;
use crate::context::Context;

/// Run the register command.
pub fn run(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let (password, confirm) = match args.password {
        Some(password) => (password.clone(), password),
        None => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords must match")
                .interact()
                .context("failed to read password")?;
            (password.clone(), password)
        }
    };

    // The form's preconditions; the session store assumes they held.
    validate_registration(&Registration {
        name: args.name.clone(),
        email: args.email.clone(),
        password: password.clone(),
        confirm_password: confirm,
        address: args.address.clone(),
    })?;

    let spinner = ctx.output.spinner("Creating account...");
    let result = ctx.sessions.register(NewIdentity {
        name: args.name,
        email: args.email,
        password,
        address: args.address,
    });
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let identity = result?;

    if ctx.output.is_json() {
        ctx.output.json_value(&identity);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Registered and signed in as {} ({})",
        identity.name, identity.role
    ));
    Ok(())
}
