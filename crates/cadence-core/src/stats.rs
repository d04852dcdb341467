//! Derived statistics over the completion log.
//!
//! Everything here is a pure function of its inputs: the engine never
//! touches the store, the clock, or any shared state, so the same record
//! set always produces the same output. All groupings are a single pass
//! over the log into `{completed, total}` tallies keyed by date, ISO week
//! number, or weekday, with rates derived in a final pass.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

use cadence_types::{CompletionRecord, Task, WEEK};

/// Maximum number of rows in the incomplete-task ranking.
pub const TOP_INCOMPLETE_LIMIT: usize = 5;

/// Totals across the entire completion log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    /// Number of completion records ever written.
    pub total: u64,
    /// Number of records marked completed.
    pub completed: u64,
    /// `completed / total` as a percentage.
    pub rate: f64,
}

/// Completion counts for one calendar date.
///
/// `total` is the number of tasks that have *any* record for the date,
/// not the number of tasks assigned to that date's weekday. For the
/// assigned-count denominator see
/// [`DailyProgress`](crate::progress::DailyProgress).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: Date,
    pub completed: u64,
    pub total: u64,
    /// `completed / total` as a percentage, with `total` counting the
    /// records present for this date.
    pub rate: f64,
}

/// Completion counts for one ISO-8601 week number.
///
/// Week numbers are not qualified by year: records from week 12 of two
/// different years share a single bucket. Kept for compatibility with
/// historical data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// ISO week number (week 1 contains the year's first Thursday).
    pub week: u8,
    pub completed: u64,
    pub total: u64,
    pub rate: f64,
}

/// Completion counts for one weekday name, collapsed across all dates.
///
/// The weekday comes from each record's date, not from the task's
/// assigned weekday; the two coincide only when tasks are checked off on
/// the day they were assigned. Weekdays without any records carry `None`
/// throughout; "no data" is a different signal than 0%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaywiseStats {
    pub weekday: Weekday,
    pub completed: Option<u64>,
    pub total: Option<u64>,
    pub rate: Option<f64>,
}

/// One (date, weekday) cell for calendar-style display.
///
/// The weekday is derived from the date and carried as a redundant column
/// so a renderer can place the cell without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub date: Date,
    pub weekday: Weekday,
    pub completed: u64,
    pub total: u64,
}

/// How often a task was left incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteTask {
    pub description: String,
    pub incomplete_count: u64,
}

/// Every derived view over the completion log.
///
/// Produced by [`compute_statistics`]; recomputed in full on each call and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub overall: OverallStats,
    /// One row per distinct date, ascending.
    pub daily: Vec<DailyStats>,
    /// One row per ISO week number present, ascending.
    pub weekly: Vec<WeeklyStats>,
    /// Exactly seven rows, Monday first.
    pub daywise: Vec<DaywiseStats>,
    /// One row per distinct date, ascending.
    pub heatmap: Vec<HeatmapRow>,
    /// At most [`TOP_INCOMPLETE_LIMIT`] rows, non-increasing by count.
    pub top_incomplete: Vec<IncompleteTask>,
}

/// Running completed/total tally for one group.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    completed: u64,
    total: u64,
}

impl Tally {
    fn record(&mut self, completed: bool) {
        self.total += 1;
        if completed {
            self.completed += 1;
        }
    }

    fn rate(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Compute every statistics view from the full completion log.
///
/// Returns `None` when the log is empty: an explicit "no data yet"
/// signal, distinct from a zero-filled [`Statistics`]. Callers are
/// expected to branch on it before rendering.
///
/// `tasks` is consulted only by the incomplete-task ranking (which needs
/// descriptions); records whose task has been deleted still count in
/// every date-keyed view.
pub fn compute_statistics(records: &[CompletionRecord], tasks: &[Task]) -> Option<Statistics> {
    if records.is_empty() {
        return None;
    }

    let mut overall = Tally::default();
    let mut by_date: BTreeMap<Date, Tally> = BTreeMap::new();
    let mut by_week: BTreeMap<u8, Tally> = BTreeMap::new();
    let mut by_weekday: [Option<Tally>; 7] = [None; 7];

    for record in records {
        overall.record(record.completed);
        by_date.entry(record.date).or_default().record(record.completed);
        by_week
            .entry(record.date.iso_week())
            .or_default()
            .record(record.completed);
        by_weekday[record.date.weekday().number_days_from_monday() as usize]
            .get_or_insert_with(Tally::default)
            .record(record.completed);
    }

    let daily = by_date
        .iter()
        .map(|(&date, tally)| DailyStats {
            date,
            completed: tally.completed,
            total: tally.total,
            rate: tally.rate(),
        })
        .collect();

    let weekly = by_week
        .iter()
        .map(|(&week, tally)| WeeklyStats {
            week,
            completed: tally.completed,
            total: tally.total,
            rate: tally.rate(),
        })
        .collect();

    let daywise = WEEK
        .iter()
        .map(|&weekday| {
            match by_weekday[weekday.number_days_from_monday() as usize] {
                Some(tally) => DaywiseStats {
                    weekday,
                    completed: Some(tally.completed),
                    total: Some(tally.total),
                    rate: Some(tally.rate()),
                },
                None => DaywiseStats {
                    weekday,
                    completed: None,
                    total: None,
                    rate: None,
                },
            }
        })
        .collect();

    let heatmap = by_date
        .iter()
        .map(|(&date, tally)| HeatmapRow {
            date,
            weekday: date.weekday(),
            completed: tally.completed,
            total: tally.total,
        })
        .collect();

    Some(Statistics {
        overall: OverallStats {
            total: overall.total,
            completed: overall.completed,
            rate: overall.rate(),
        },
        daily,
        weekly,
        daywise,
        heatmap,
        top_incomplete: rank_incomplete(records, tasks),
    })
}

/// Rank task descriptions by how often they were left incomplete.
///
/// Records referencing a deleted task have no description to group by and
/// are skipped. Ties sort by description ascending: counting into a
/// `BTreeMap` and sorting stably keeps equal counts in alphabetical order.
fn rank_incomplete(records: &[CompletionRecord], tasks: &[Task]) -> Vec<IncompleteTask> {
    let descriptions: HashMap<i64, &str> = tasks
        .iter()
        .map(|task| (task.id, task.description.as_str()))
        .collect();

    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records.iter().filter(|r| !r.completed) {
        if let Some(&description) = descriptions.get(&record.task_id) {
            *counts.entry(description).or_insert(0) += 1;
        }
    }

    let mut ranking: Vec<IncompleteTask> = counts
        .into_iter()
        .map(|(description, incomplete_count)| IncompleteTask {
            description: description.to_string(),
            incomplete_count,
        })
        .collect();
    ranking.sort_by(|a, b| b.incomplete_count.cmp(&a.incomplete_count));
    ranking.truncate(TOP_INCOMPLETE_LIMIT);
    ranking
}

/// Encouragement line for an overall completion rate.
///
/// Tiered at all tasks done, at least 80%, at least 50%, and everything
/// below.
pub fn motivational_message(completion_rate: f64) -> &'static str {
    if completion_rate >= 100.0 {
        "Excellent work! You've completed all your tasks. Keep up the great discipline!"
    } else if completion_rate >= 80.0 {
        "Great job! You're on track. Aim for 100% tomorrow!"
    } else if completion_rate >= 50.0 {
        "Good effort! Try to push a bit more for better results."
    } else {
        "Don't give up! Identify obstacles and strive to improve your completion rate."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn task(id: i64, weekday: Weekday, description: &str) -> Task {
        Task {
            id,
            weekday,
            description: description.to_string(),
        }
    }

    fn record(date: Date, task_id: i64, completed: bool) -> CompletionRecord {
        CompletionRecord::new(date, task_id, completed)
    }

    fn monday_fixture() -> (Vec<CompletionRecord>, Vec<Task>) {
        // 2024-01-01 is a Monday.
        let tasks = vec![
            task(1, Weekday::Monday, "Morning run"),
            task(2, Weekday::Monday, "Read a chapter"),
        ];
        let records = vec![
            record(date!(2024-01-01), 1, true),
            record(date!(2024-01-01), 2, false),
        ];
        (records, tasks)
    }

    #[test]
    fn test_empty_log_yields_no_data() {
        assert_eq!(compute_statistics(&[], &[]), None);
    }

    #[test]
    fn test_overall_counts_and_rate() {
        let (records, tasks) = monday_fixture();
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(stats.overall.total, 2);
        assert_eq!(stats.overall.completed, 1);
        assert_eq!(stats.overall.rate, 50.0);
    }

    #[test]
    fn test_daily_row_uses_record_count_denominator() {
        let (records, tasks) = monday_fixture();
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(
            stats.daily,
            vec![DailyStats {
                date: date!(2024-01-01),
                completed: 1,
                total: 2,
                rate: 50.0,
            }]
        );
    }

    #[test]
    fn test_daily_rows_sorted_ascending_by_date() {
        let tasks = vec![task(1, Weekday::Monday, "Run")];
        let records = vec![
            record(date!(2024-01-08), 1, true),
            record(date!(2024-01-01), 1, false),
        ];
        let stats = compute_statistics(&records, &tasks).unwrap();

        let dates: Vec<Date> = stats.daily.iter().map(|row| row.date).collect();
        assert_eq!(dates, vec![date!(2024-01-01), date!(2024-01-08)]);
    }

    #[test]
    fn test_weekly_single_row_for_one_iso_week() {
        let tasks = vec![task(1, Weekday::Monday, "Run")];
        // Monday through Wednesday of ISO week 1, 2024.
        let records = vec![
            record(date!(2024-01-01), 1, true),
            record(date!(2024-01-02), 1, false),
            record(date!(2024-01-03), 1, true),
        ];
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(stats.weekly.len(), 1);
        assert_eq!(stats.weekly[0].week, 1);
        assert_eq!(stats.weekly[0].completed, 2);
        assert_eq!(stats.weekly[0].total, 3);
    }

    #[test]
    fn test_weekly_merges_same_week_number_across_years() {
        let tasks = vec![task(1, Weekday::Monday, "Run")];
        // Both dates fall in ISO week 12 of their respective years.
        let records = vec![
            record(date!(2023-03-20), 1, true),
            record(date!(2024-03-18), 1, false),
        ];
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(stats.weekly.len(), 1);
        assert_eq!(stats.weekly[0].week, 12);
        assert_eq!(stats.weekly[0].total, 2);
    }

    #[test]
    fn test_daywise_always_seven_rows_monday_first() {
        let (records, tasks) = monday_fixture();
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(stats.daywise.len(), 7);
        let order: Vec<Weekday> = stats.daywise.iter().map(|row| row.weekday).collect();
        assert_eq!(order, WEEK.to_vec());
    }

    #[test]
    fn test_daywise_missing_weekdays_are_none_not_zero() {
        let (records, tasks) = monday_fixture();
        let stats = compute_statistics(&records, &tasks).unwrap();

        let monday = &stats.daywise[0];
        assert_eq!(monday.completed, Some(1));
        assert_eq!(monday.total, Some(2));
        assert_eq!(monday.rate, Some(50.0));

        for row in &stats.daywise[1..] {
            assert_eq!(row.completed, None);
            assert_eq!(row.total, None);
            assert_eq!(row.rate, None);
        }
    }

    #[test]
    fn test_daywise_groups_by_record_date_not_assigned_weekday() {
        // Task assigned to Monday but checked off on a Tuesday date.
        let tasks = vec![task(1, Weekday::Monday, "Run")];
        let records = vec![record(date!(2024-01-02), 1, true)];
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(stats.daywise[0].total, None);
        assert_eq!(stats.daywise[1].total, Some(1));
    }

    #[test]
    fn test_heatmap_carries_derived_weekday() {
        let (records, tasks) = monday_fixture();
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(
            stats.heatmap,
            vec![HeatmapRow {
                date: date!(2024-01-01),
                weekday: Weekday::Monday,
                completed: 1,
                total: 2,
            }]
        );
    }

    #[test]
    fn test_ranking_sorted_and_truncated() {
        let tasks: Vec<Task> = (1..=7)
            .map(|id| task(id, Weekday::Monday, &format!("Task {id}")))
            .collect();
        let mut records = Vec::new();
        // Task N is left incomplete N times.
        for t in &tasks {
            for day in 0..t.id {
                let date = date!(2024-01-01) + time::Duration::days(day);
                records.push(record(date, t.id, false));
            }
        }
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(stats.top_incomplete.len(), TOP_INCOMPLETE_LIMIT);
        assert_eq!(stats.top_incomplete[0].description, "Task 7");
        assert_eq!(stats.top_incomplete[0].incomplete_count, 7);
        for pair in stats.top_incomplete.windows(2) {
            assert!(pair[0].incomplete_count >= pair[1].incomplete_count);
        }
    }

    #[test]
    fn test_ranking_ties_break_alphabetically() {
        let tasks = vec![
            task(1, Weekday::Monday, "Zumba"),
            task(2, Weekday::Monday, "Aerobics"),
        ];
        let records = vec![
            record(date!(2024-01-01), 1, false),
            record(date!(2024-01-01), 2, false),
        ];
        let stats = compute_statistics(&records, &tasks).unwrap();

        let order: Vec<&str> = stats
            .top_incomplete
            .iter()
            .map(|row| row.description.as_str())
            .collect();
        assert_eq!(order, vec!["Aerobics", "Zumba"]);
    }

    #[test]
    fn test_ranking_excludes_completed_records() {
        let tasks = vec![task(1, Weekday::Monday, "Run")];
        let records = vec![record(date!(2024-01-01), 1, true)];
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert!(stats.top_incomplete.is_empty());
    }

    #[test]
    fn test_dangling_task_reference_counts_in_date_views_only() {
        // Record for task 99, which no longer exists.
        let tasks = vec![task(1, Weekday::Monday, "Run")];
        let records = vec![
            record(date!(2024-01-01), 1, false),
            record(date!(2024-01-01), 99, false),
        ];
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert_eq!(stats.overall.total, 2);
        assert_eq!(stats.daily[0].total, 2);
        assert_eq!(stats.top_incomplete.len(), 1);
        assert_eq!(stats.top_incomplete[0].description, "Run");
    }

    #[test]
    fn test_rates_stay_within_bounds() {
        let tasks = vec![task(1, Weekday::Monday, "Run")];
        let mut records = Vec::new();
        for day in 0..30 {
            let date = date!(2024-01-01) + time::Duration::days(day);
            records.push(record(date, 1, day % 3 == 0));
        }
        let stats = compute_statistics(&records, &tasks).unwrap();

        assert!(stats.overall.rate >= 0.0 && stats.overall.rate <= 100.0);
        for row in &stats.daily {
            assert!(row.completed <= row.total);
            assert!(row.rate >= 0.0 && row.rate <= 100.0);
        }
        for row in &stats.weekly {
            assert!(row.completed <= row.total);
            assert!(row.rate >= 0.0 && row.rate <= 100.0);
        }
        for row in stats.daywise.iter().filter(|row| row.total.is_some()) {
            assert!(row.completed.unwrap() <= row.total.unwrap());
            let rate = row.rate.unwrap();
            assert!(rate >= 0.0 && rate <= 100.0);
        }
    }

    #[test]
    fn test_compute_statistics_is_pure() {
        let (records, tasks) = monday_fixture();
        let first = compute_statistics(&records, &tasks);
        let second = compute_statistics(&records, &tasks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_motivational_message_tiers() {
        assert!(motivational_message(100.0).starts_with("Excellent"));
        assert!(motivational_message(85.0).starts_with("Great job"));
        assert!(motivational_message(50.0).starts_with("Good effort"));
        assert!(motivational_message(10.0).starts_with("Don't give up"));
    }
}
