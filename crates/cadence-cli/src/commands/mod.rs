//! Command implementations for the CLI.

mod check;
mod config;
mod export;
mod progress;
mod reset;
mod stats;
mod task;
mod today;

pub use check::cmd_check;
pub use config::cmd_config;
pub use export::{cmd_export, cmd_import};
pub use progress::cmd_progress;
pub use reset::cmd_reset;
pub use stats::cmd_stats;
pub use task::cmd_task;
pub use today::cmd_today;
