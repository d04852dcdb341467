//! CSV export and import for the completion log.

use serde::{Deserialize, Serialize};
use tracing::info;

use cadence_types::{format_date, parse_date};

use crate::error::Result;
use crate::store::Store;

/// One completion record in the CSV interchange format.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    date: String,
    task_id: i64,
    completed: bool,
}

/// Outcome of a completion-log import.
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Rows seen in the input.
    pub total: usize,
    /// Rows written to the log.
    pub imported: usize,
    /// Rows whose `(date, task_id)` pair already existed.
    pub skipped: usize,
    /// Per-row parse failures, in input order.
    pub errors: Vec<String>,
}

impl Store {
    /// Render the full completion log as CSV
    /// (`date,task_id,completed` with a header row).
    pub fn export_completions_csv(&self) -> Result<String> {
        let records = self.all_completions()?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &records {
            writer.serialize(CsvRecord {
                date: format_date(record.date),
                task_id: record.task_id,
                completed: record.completed,
            })?;
        }

        let bytes = writer.into_inner().map_err(std::io::Error::other)?;
        String::from_utf8(bytes).map_err(|e| std::io::Error::other(e).into())
    }

    /// Import completion records from CSV data.
    ///
    /// Existing `(date, task_id)` pairs are left untouched and counted as
    /// skipped. Rows that fail to parse are reported in
    /// [`ImportResult::errors`] without aborting the rest of the import.
    pub fn import_completions_csv(&self, data: &str) -> Result<ImportResult> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let mut result = ImportResult::default();

        for row in reader.deserialize::<CsvRecord>() {
            result.total += 1;

            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    result.errors.push(e.to_string());
                    continue;
                }
            };

            let date = match parse_date(&row.date) {
                Ok(date) => date,
                Err(e) => {
                    result.errors.push(e.to_string());
                    continue;
                }
            };

            let inserted = self.conn.execute(
                "INSERT OR IGNORE INTO completions (date, task_id, completed)
                 VALUES (?1, ?2, ?3)",
                rusqlite::params![format_date(date), row.task_id, row.completed],
            )?;
            if inserted == 0 {
                result.skipped += 1;
            } else {
                result.imported += 1;
            }
        }

        info!(
            "Imported {} of {} completion record(s), {} skipped",
            result.imported, result.total, result.skipped
        );
        Ok(result)
    }
}
