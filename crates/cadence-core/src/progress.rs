//! Daily progress measured against the weekday's assigned-task count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use cadence_types::{CompletionRecord, Task};

/// Completion percentage for one date, with the number of tasks assigned
/// to that date's weekday as the denominator.
///
/// This is deliberately a different measure from
/// [`DailyStats`](crate::stats::DailyStats): there the denominator is the
/// number of records present for the date, here it is the task table's
/// per-weekday assignment count. The two disagree whenever a day has
/// tasks that were never tracked, and both definitions are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: Date,
    /// `completed_that_date / tasks_assigned_to_the_weekday * 100`,
    /// or 0 when the weekday has no assigned tasks.
    pub percentage: f64,
}

/// Completion percentage per date against the weekday assignment count.
///
/// One row per distinct date in the log, sorted ascending. An empty log
/// yields an empty vector.
pub fn daily_progress(records: &[CompletionRecord], tasks: &[Task]) -> Vec<DailyProgress> {
    let mut assigned = [0u64; 7];
    for task in tasks {
        assigned[task.weekday.number_days_from_monday() as usize] += 1;
    }

    let mut completed_by_date: BTreeMap<Date, u64> = BTreeMap::new();
    for record in records {
        let completed = completed_by_date.entry(record.date).or_insert(0);
        if record.completed {
            *completed += 1;
        }
    }

    completed_by_date
        .into_iter()
        .map(|(date, completed)| {
            let assigned = assigned[date.weekday().number_days_from_monday() as usize];
            let percentage = if assigned > 0 {
                completed as f64 / assigned as f64 * 100.0
            } else {
                0.0
            };
            DailyProgress { date, percentage }
        })
        .collect()
}
