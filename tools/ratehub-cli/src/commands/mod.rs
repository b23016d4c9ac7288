//! CLI command implementations.

pub mod account;
pub mod admin;
pub mod login;
pub mod register;
pub mod stores;

use clap::Args;

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address.
    pub email: String,

    /// Password. Prompted interactively when omitted.
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Display name (20-60 characters).
    #[arg(long)]
    pub name: String,

    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Postal address.
    #[arg(long)]
    pub address: String,

    /// Password. Prompted (with confirmation) when omitted.
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the passwd command.
#[derive(Args)]
pub struct PasswdArgs {
    /// Current password. Prompted when omitted.
    #[arg(long)]
    pub current: Option<String>,

    /// New password. Prompted (with confirmation) when omitted.
    #[arg(long)]
    pub new: Option<String>,
}

/// Arguments for the rate command.
#[derive(Args)]
pub struct RateArgs {
    /// Store ID or name.
    pub store: String,

    /// Star value, 1-5.
    pub value: u8,
}
