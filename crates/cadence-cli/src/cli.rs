//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "cadence")]
#[command(author, version, about = "Daily task tracker with progress insights", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Database file (overrides the config file and platform default)
    #[arg(long, global = true, env = "CADENCE_DB")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a date's tasks with their completion marks
    Today {
        /// Date to show (YYYY-MM-DD), defaulting to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Mark a task completed for a date
    Check {
        /// Task id (as shown by `cadence today`)
        task_id: i64,

        /// Date to record (YYYY-MM-DD), defaulting to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Mark a task not completed for a date
    Uncheck {
        /// Task id (as shown by `cadence today`)
        task_id: i64,

        /// Date to record (YYYY-MM-DD), defaulting to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Manage the recurring task list
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Show aggregated completion statistics
    Stats {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show per-date completion against each weekday's assigned tasks
    Progress {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete completion records for a date (or the whole log)
    Reset {
        /// Date to reset (YYYY-MM-DD), defaulting to today
        #[arg(short, long, conflicts_with = "all")]
        date: Option<String>,

        /// Clear the entire completion log
        #[arg(long)]
        all: bool,
    },

    /// Export the completion log as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import completion records from CSV
    Import {
        /// Read from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a recurring task to a weekday
    Add {
        /// Weekday name (e.g. monday, fri)
        weekday: String,

        /// Task description
        description: String,
    },

    /// List tasks, for one weekday or the whole week
    List {
        /// Weekday name; lists the whole week when omitted
        weekday: Option<String>,
    },

    /// Remove a task by id (its completion history is kept)
    Remove {
        /// Task id
        task_id: i64,
    },
}

#[derive(Clone, Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Set the default database file
    SetDatabase {
        /// Database file path
        path: PathBuf,
    },
}
