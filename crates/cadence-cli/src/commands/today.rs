//! Today command - a date's tasks and their completion marks.

use anyhow::Result;
use time::Date;

use cadence_store::Store;
use cadence_types::{format_date, weekday_name};

/// Execute the today command.
pub fn cmd_today(store: &Store, date: Date) -> Result<()> {
    let weekday = date.weekday();
    let tasks = store.list_tasks(weekday)?;
    let progress = store.completions_for(date)?;

    println!("Tasks for {}, {}", weekday_name(weekday), format_date(date));

    if tasks.is_empty() {
        println!();
        println!("No tasks assigned for {}.", weekday_name(weekday));
        return Ok(());
    }

    println!();
    let mut completed = 0usize;
    for task in &tasks {
        let done = progress.get(&task.id).copied().unwrap_or(false);
        if done {
            completed += 1;
        }
        println!(
            "  [{}] {:>4}  {}",
            if done { "x" } else { " " },
            task.id,
            task.description
        );
    }

    let percentage = completed as f64 / tasks.len() as f64 * 100.0;
    println!();
    println!(
        "Progress: {}/{} tasks completed ({:.2}%)",
        completed,
        tasks.len(),
        percentage
    );

    Ok(())
}
