//! Progress command - per-date completion against assigned-task counts.

use anyhow::Result;

use cadence_core::daily_progress;
use cadence_store::Store;
use cadence_types::format_date;

use crate::cli::OutputFormat;

/// Execute the progress command.
///
/// Unlike the daily rows of `cadence stats`, the percentage here divides
/// by the number of tasks assigned to each date's weekday.
pub fn cmd_progress(store: &Store, format: OutputFormat) -> Result<()> {
    let records = store.all_completions()?;
    let tasks = store.list_all_tasks()?;

    let progress = daily_progress(&records, &tasks);
    if progress.is_empty() {
        println!("No progress data available.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&progress)?),
        OutputFormat::Text => {
            println!("  {:<12} {:>10}", "Date", "Progress");
            for row in &progress {
                println!("  {:<12} {:>9.2}%", format_date(row.date), row.percentage);
            }
        }
    }

    Ok(())
}
