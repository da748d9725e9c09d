//! Database connection and schema management

use crate::error::{Result, ScoutError};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

const CREATE_PLAYERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    nationality TEXT,
    role TEXT NOT NULL,
    age INTEGER,
    matches_played INTEGER,
    strike_rate REAL,
    economy_rate REAL,
    base_price INTEGER NOT NULL,
    skill_rating INTEGER NOT NULL,
    auction_status TEXT DEFAULT 'Available',
    final_price INTEGER DEFAULT 0
)";

const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_players_status ON players(auction_status)";

/// Connection manager for the player registry.
pub struct ScoutDatabase {
    pub(crate) conn: Connection,
}

impl ScoutDatabase {
    /// Open the registry at its default location, creating the schema if it
    /// does not exist yet. Never drops existing data.
    pub fn new() -> Result<Self> {
        Self::open(Self::database_path()?)
    }

    /// Open (or create) a registry at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Open an in-memory registry. Handy for tests and dry runs.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Get the default path to the registry database file.
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| ScoutError::Validation {
            field: "database path",
            message: "could not determine platform data directory".to_string(),
        })?;
        Ok(data_dir.join("auction-scout").join("scout.db"))
    }

    /// Create the players table if it is missing. Idempotent and
    /// non-destructive, safe to call on every startup.
    pub(crate) fn ensure_schema(&self) -> Result<()> {
        self.conn.execute(CREATE_PLAYERS_TABLE, [])?;
        self.conn.execute(CREATE_STATUS_INDEX, [])?;
        Ok(())
    }

    /// Drop and recreate the players table, discarding every record.
    ///
    /// Destructive by contract; callers are expected to confirm with the
    /// user before invoking this.
    pub fn reset_schema(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DROP TABLE IF EXISTS players", [])?;
        tx.execute(CREATE_PLAYERS_TABLE, [])?;
        tx.execute(CREATE_STATUS_INDEX, [])?;
        tx.commit()?;
        Ok(())
    }
}
