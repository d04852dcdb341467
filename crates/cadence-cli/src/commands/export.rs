//! Export/import commands - completion-log CSV interchange.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use cadence_store::Store;

/// Execute the export command.
pub fn cmd_export(store: &Store, output: Option<PathBuf>) -> Result<()> {
    let content = store.export_completions_csv()?;

    match output {
        Some(path) => {
            std::fs::write(&path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Execute the import command.
pub fn cmd_import(store: &Store, input: Option<PathBuf>) -> Result<()> {
    let data = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let result = store.import_completions_csv(&data)?;

    println!("Import complete:");
    println!("  Total records: {}", result.total);
    println!("  Imported: {}", result.imported);
    println!("  Skipped (duplicates): {}", result.skipped);

    if !result.errors.is_empty() {
        println!("\nErrors ({}):", result.errors.len());
        for err in result.errors.iter().take(10) {
            println!("  {}", err);
        }
        if result.errors.len() > 10 {
            println!("  ... and {} more errors", result.errors.len() - 10);
        }
    }

    Ok(())
}
