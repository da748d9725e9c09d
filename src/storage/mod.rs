//! Storage layer for the auction scout CLI
//!
//! This module provides a clean abstraction over the SQLite registry,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Insert, filtered retrieval, reset, and stats
//! - `batch`: Validated all-or-nothing bulk import
//! - `auction`: The randomized valuation pass

pub mod auction;
pub mod batch;
pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use batch::{BatchRow, REQUIRED_COLUMNS};
pub use models::*;
pub use schema::ScoutDatabase;
