//! Handlers for schema management and bulk import.

use crate::storage::{BatchRow, ScoutDatabase};
use anyhow::{Context, Result};
use std::path::Path;

/// Ensure the schema exists, or destructively recreate it with `force`.
pub fn handle_init(db: &mut ScoutDatabase, force: bool) -> Result<()> {
    if force {
        db.reset_schema()?;
        println!("Registry schema recreated. All previous records were discarded.");
    } else {
        // Opening the registry already ensured the schema, so this is a no-op
        // confirmation for scripts that want an explicit init step.
        println!("Registry schema is in place. Use --force to recreate it from scratch.");
    }
    Ok(())
}

/// Import a JSON array of player rows as one atomic batch.
pub fn handle_import(db: &mut ScoutDatabase, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let rows: Vec<BatchRow> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of player rows", file.display()))?;

    let count = db.import_batch(&rows)?;
    println!("Imported {} players from {}", count, file.display());
    Ok(())
}
