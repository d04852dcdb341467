use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cadence_store::Store;

mod cli;
mod commands;
mod config;
mod format;
mod util;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "cadence", &mut io::stdout());
        return Ok(());
    }

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // The config command works without touching the database
    if let Commands::Config { action } = &cli.command {
        return commands::cmd_config(action.clone());
    }

    let config = Config::load()?;
    let db_path = config.database_path(cli.database.clone());
    tracing::debug!("Using database at {}", db_path.display());

    let store = Store::open(&db_path).context("Failed to open database")?;

    match cli.command {
        Commands::Today { date } => commands::cmd_today(&store, util::resolve_date(date)?),
        Commands::Check { task_id, date } => {
            commands::cmd_check(&store, task_id, util::resolve_date(date)?, true)
        }
        Commands::Uncheck { task_id, date } => {
            commands::cmd_check(&store, task_id, util::resolve_date(date)?, false)
        }
        Commands::Task { action } => commands::cmd_task(&store, action),
        Commands::Stats { format } => commands::cmd_stats(&store, format),
        Commands::Progress { format } => commands::cmd_progress(&store, format),
        Commands::Reset { date, all } => commands::cmd_reset(&store, date, all),
        Commands::Export { output } => commands::cmd_export(&store, output),
        Commands::Import { input } => commands::cmd_import(&store, input),
        Commands::Config { .. } | Commands::Completions { .. } => {
            // Already handled above
            unreachable!()
        }
    }
}
