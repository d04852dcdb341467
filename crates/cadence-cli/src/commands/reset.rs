//! Reset command - delete completion records.

use anyhow::Result;

use cadence_store::Store;
use cadence_types::format_date;

use crate::util::resolve_date;

/// Execute the reset command.
///
/// Resetting deletes records outright; a deleted record means "not
/// tracked", not "marked incomplete".
pub fn cmd_reset(store: &Store, date: Option<String>, all: bool) -> Result<()> {
    if all {
        let deleted = store.delete_all_completions()?;
        println!("Cleared the completion log ({} record(s))", deleted);
        return Ok(());
    }

    let date = resolve_date(date)?;
    let deleted = store.delete_completions(date)?;
    println!(
        "Reset {} completion record(s) for {}",
        deleted,
        format_date(date)
    );

    Ok(())
}
