//! Combat calculator for The Battle of Polytopia.
//!
//! Units are written in the compact notation of `polycalc-content`:
//! `wa`, `ar:5-d`, `wa-v`, `rm(sw):12-b`.
//!
//! ```text
//! polycalc single wa je
//! polycalc multi --attackers "wa, ar" --defenders "de-d"
//! polycalc --json units
//! ```

mod commands;
mod context;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Multi, Single, Units};
use context::{Context, GlobalArgs};

/// Combat calculator for The Battle of Polytopia
#[derive(Parser)]
#[command(name = "polycalc")]
#[command(about = "Exact combat outcomes for Polytopia units", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// One attacker against one defender
    Single(Single),

    /// Several attackers against a line of defenders
    Multi(Multi),

    /// List the unit catalog
    Units(Units),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = Context::load(&cli.global)?;

    match cli.command {
        Command::Single(cmd) => cmd.execute(&ctx),
        Command::Multi(cmd) => cmd.execute(&ctx),
        Command::Units(cmd) => cmd.execute(&ctx),
    }
}
