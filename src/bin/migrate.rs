//! Database migration runner.
//!
//! Usage:
//!   migrate run             — apply pending migrations
//!   migrate rollback        — roll back last migration
//!   migrate status          — show migration status
//!   migrate generate <name> — create a new migration file
//!
//! Migrations live in the MIGRATIONS_DIR directory (default ./migrations)
//! as timestamped .sql files with up and down sections.

use anyhow::Result;
use clap::{error::ErrorKind, Parser, Subcommand};
use dotenv::dotenv;
use starterkit::{migrations, utils};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "migrate", about = "Database migration runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show migration status
    Status,
    /// Create a new migration file
    Generate { name: String },
    /// Apply pending migrations
    Run,
    /// Roll back the last migration
    Rollback,
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("RUST_LOG"))
        .init();

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ) {
            err.exit();
        }
        eprint!("{}", err);
        eprintln!("Available: status, generate, run, rollback");
        std::process::exit(1);
    });
    let dir = utils::migrations_dir();

    match cli.command.unwrap_or(Command::Status) {
        Command::Status => {
            let files = migrations::list_migrations(&dir)?;
            if files.is_empty() {
                println!("No migration files found. Create one with: migrate generate <name>");
            } else {
                println!("Found {} migration(s):", files.len());
                for file in &files {
                    println!("  - {}", file);
                }
            }
        }
        Command::Generate { name } => {
            let path = migrations::generate(&dir, &name)?;
            println!("Created migration: {}", path.display());
        }
        Command::Run => {
            println!("TODO: wire the migration runner to your database of choice.");
        }
        Command::Rollback => {
            println!("TODO: wire rollback to your database of choice.");
        }
    }

    Ok(())
}
