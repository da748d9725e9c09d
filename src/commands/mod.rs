//! Command implementations for the auction scout CLI

pub mod admin;
pub mod auction;
pub mod players;
pub mod stats;

#[cfg(test)]
mod tests;

use crate::storage::ScoutDatabase;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Open the registry, honoring an explicit `--db` override.
pub fn open_registry(db_path: Option<PathBuf>) -> Result<ScoutDatabase> {
    match db_path {
        Some(path) => ScoutDatabase::open(&path)
            .with_context(|| format!("failed to open registry at {}", path.display())),
        None => ScoutDatabase::new().context("failed to open registry"),
    }
}
