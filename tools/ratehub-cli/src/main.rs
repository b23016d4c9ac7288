//! RateHub CLI - demo surface for the store-rating platform.
//!
//! Commands:
//! - `ratehub login` / `ratehub register` / `ratehub logout` - session lifecycle
//! - `ratehub whoami` - show the signed-in identity
//! - `ratehub passwd` - change password
//! - `ratehub stores` - list stores with average ratings
//! - `ratehub rate` - rate a store 1-5
//! - `ratehub stats` - aggregate platform statistics
//! - `ratehub users` - list identities (admin only)

mod commands;
mod context;
mod output;
mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LoginArgs, PasswdArgs, RateArgs, RegisterArgs};

/// RateHub - browse and rate stores
#[derive(Parser)]
#[command(name = "ratehub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// State directory (defaults to .ratehub in the working directory)
    #[arg(long, global = true)]
    state_dir: Option<String>,

    /// Simulated backend latency in milliseconds
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login(LoginArgs),

    /// Register a new account
    Register(RegisterArgs),

    /// Sign out
    Logout,

    /// Show the signed-in identity
    Whoami,

    /// Change the signed-in identity's password
    Passwd(PasswdArgs),

    /// List stores with their average ratings
    Stores,

    /// Rate a store
    Rate(RateArgs),

    /// Show aggregate platform statistics
    Stats,

    /// List all identities (admin only)
    Users,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(false)
            .init();
    }

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.state_dir.as_deref(), cli.latency_ms, output)?;

    let result = match cli.command {
        Commands::Login(args) => commands::login::run(args, &ctx),
        Commands::Register(args) => commands::register::run(args, &ctx),
        Commands::Logout => commands::account::logout(&ctx),
        Commands::Whoami => commands::account::whoami(&ctx),
        Commands::Passwd(args) => commands::account::passwd(args, &ctx),
        Commands::Stores => commands::stores::list(&ctx),
        Commands::Rate(args) => commands::stores::rate(args, &ctx),
        Commands::Stats => commands::admin::stats(&ctx),
        Commands::Users => commands::admin::users(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
