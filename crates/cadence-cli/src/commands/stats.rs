//! Stats command - aggregated completion statistics.

use anyhow::Result;

use cadence_core::{Statistics, compute_statistics, motivational_message};
use cadence_store::Store;
use cadence_types::{format_date, weekday_name};

use crate::cli::OutputFormat;
use crate::format::{opt_count, opt_rate};

/// Execute the stats command.
pub fn cmd_stats(store: &Store, format: OutputFormat) -> Result<()> {
    let records = store.all_completions()?;
    let tasks = store.list_all_tasks()?;

    let Some(stats) = compute_statistics(&records, &tasks) else {
        println!("No progress data available. Complete some tasks to see insights.");
        return Ok(());
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => print_stats(&stats),
    }

    Ok(())
}

fn print_stats(stats: &Statistics) {
    println!("Overall");
    println!("  Total tasks:     {}", stats.overall.total);
    println!("  Completed tasks: {}", stats.overall.completed);
    println!("  Completion rate: {:.2}%", stats.overall.rate);
    println!();
    println!("  {}", motivational_message(stats.overall.rate));
    println!();

    println!("Completion rate over time");
    println!(
        "  {:<12} {:>10} {:>8} {:>8}",
        "Date", "Completed", "Total", "Rate"
    );
    for row in &stats.daily {
        println!(
            "  {:<12} {:>10} {:>8} {:>7.2}%",
            format_date(row.date),
            row.completed,
            row.total,
            row.rate
        );
    }
    println!();

    println!("Weekly completion rate");
    println!(
        "  {:<6} {:>10} {:>8} {:>8}",
        "Week", "Completed", "Total", "Rate"
    );
    for row in &stats.weekly {
        println!(
            "  {:<6} {:>10} {:>8} {:>7.2}%",
            row.week, row.completed, row.total, row.rate
        );
    }
    println!();

    println!("Day-wise performance");
    println!(
        "  {:<10} {:>10} {:>8} {:>8}",
        "Weekday", "Completed", "Total", "Rate"
    );
    for row in &stats.daywise {
        println!(
            "  {:<10} {:>10} {:>8} {:>8}",
            weekday_name(row.weekday),
            opt_count(row.completed),
            opt_count(row.total),
            opt_rate(row.rate)
        );
    }
    println!();

    println!("Completion heatmap");
    println!(
        "  {:<12} {:<10} {:>10} {:>8}",
        "Date", "Weekday", "Completed", "Total"
    );
    for row in &stats.heatmap {
        println!(
            "  {:<12} {:<10} {:>10} {:>8}",
            format_date(row.date),
            weekday_name(row.weekday),
            row.completed,
            row.total
        );
    }
    println!();

    println!("Frequently incomplete tasks");
    if stats.top_incomplete.is_empty() {
        println!("  All tasks are being completed. Great job!");
    } else {
        for row in &stats.top_incomplete {
            println!("  {:>3}x  {}", row.incomplete_count, row.description);
        }
    }
}
