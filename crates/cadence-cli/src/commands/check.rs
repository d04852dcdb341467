//! Check/uncheck commands - record completion state for a task.

use anyhow::Result;
use time::Date;

use cadence_store::Store;
use cadence_types::format_date;

/// Execute the check or uncheck command.
pub fn cmd_check(store: &Store, task_id: i64, date: Date, completed: bool) -> Result<()> {
    let known = store.list_all_tasks()?.iter().any(|task| task.id == task_id);
    if !known {
        anyhow::bail!("No task with id {}", task_id);
    }

    store.upsert_completion(date, task_id, completed)?;
    println!(
        "{} task {} for {}",
        if completed { "Checked" } else { "Unchecked" },
        task_id,
        format_date(date)
    );

    Ok(())
}
