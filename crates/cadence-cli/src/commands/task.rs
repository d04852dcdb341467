//! Task command - manage the recurring task list.

use anyhow::Result;
use time::Weekday;

use cadence_store::Store;
use cadence_types::{Task, WEEK, parse_weekday, weekday_name};

use crate::cli::TaskAction;

/// Execute the task command.
pub fn cmd_task(store: &Store, action: TaskAction) -> Result<()> {
    match action {
        TaskAction::Add {
            weekday,
            description,
        } => {
            let description = description.trim();
            if description.is_empty() {
                anyhow::bail!("Task description cannot be empty");
            }

            let weekday = parse_weekday(&weekday)?;
            let id = store.add_task(weekday, description)?;
            println!("Added task {} for {}", id, weekday_name(weekday));
        }

        TaskAction::List { weekday } => match weekday {
            Some(name) => {
                let weekday = parse_weekday(&name)?;
                print_tasks(weekday, &store.list_tasks(weekday)?);
            }
            None => {
                for weekday in WEEK {
                    print_tasks(weekday, &store.list_tasks(weekday)?);
                }
            }
        },

        TaskAction::Remove { task_id } => {
            store.delete_task(task_id)?;
            println!("Removed task {} (its completion history is kept)", task_id);
        }
    }

    Ok(())
}

fn print_tasks(weekday: Weekday, tasks: &[Task]) {
    println!("{}:", weekday_name(weekday));
    if tasks.is_empty() {
        println!("  (none)");
    }
    for task in tasks {
        println!("  {:>4}  {}", task.id, task.description);
    }
}
