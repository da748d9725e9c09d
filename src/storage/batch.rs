//! Batch loader: validates and appends externally supplied tabular records.
//!
//! The file-parsing boundary lives upstream; this module receives rows that
//! are already tabular (field-name to value maps) and owns the schema checks,
//! the default filling, and the all-or-nothing append.

use super::{models::*, schema::ScoutDatabase};
use crate::cli::types::{AuctionStatus, SkillRating};
use crate::error::{Result, ScoutError};
use rusqlite::params;
use serde_json::{Map, Value};

/// A single imported row: column name to value.
pub type BatchRow = Map<String, Value>;

/// Columns every imported row must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "role", "base_price", "skill_rating"];

impl ScoutDatabase {
    /// Append a batch of rows to the registry as one logical unit.
    ///
    /// All rows are checked and converted before anything is written, so a
    /// missing mandatory column or a non-coercible value in any row fails the
    /// whole batch and leaves the store unchanged. Row numbers in errors are
    /// 1-based. Returns the number of rows appended.
    pub fn import_batch(&mut self, rows: &[BatchRow]) -> Result<usize> {
        let mut converted = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            converted.push(convert_row(index + 1, row)?);
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO players (name, nationality, role, age, matches_played,
                                      strike_rate, economy_rate, base_price, skill_rating,
                                      auction_status, final_price)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for player in &converted {
                stmt.execute(params![
                    player.name,
                    player
                        .nationality
                        .as_deref()
                        .unwrap_or(defaults::NATIONALITY),
                    player.role,
                    player.age.unwrap_or(defaults::AGE),
                    player.matches_played.unwrap_or(defaults::MATCHES_PLAYED),
                    player.strike_rate.unwrap_or(defaults::STRIKE_RATE),
                    player.economy_rate.unwrap_or(defaults::ECONOMY_RATE),
                    player.base_price,
                    player.skill_rating,
                    AuctionStatus::Available,
                    0i64,
                ])?;
            }
        }
        tx.commit()?;

        Ok(converted.len())
    }
}

/// Convert one raw row into a validated [`NewPlayer`], without writing.
fn convert_row(row_no: usize, row: &BatchRow) -> Result<NewPlayer> {
    for column in REQUIRED_COLUMNS {
        if !row.contains_key(column) {
            return Err(ScoutError::MissingColumn {
                row: row_no,
                column,
            });
        }
    }

    let rating_raw = require_integer(row_no, row, "skill_rating")?;
    let skill_rating = u8::try_from(rating_raw)
        .ok()
        .and_then(|v| SkillRating::new(v).ok())
        .ok_or_else(|| ScoutError::InvalidRating {
            value: rating_raw.to_string(),
        })?;

    let player = NewPlayer {
        name: require_text(row_no, row, "name")?,
        nationality: optional_text(row_no, row, "nationality")?,
        role: require_text(row_no, row, "role")?,
        age: optional_u32(row_no, row, "age")?,
        matches_played: optional_u32(row_no, row, "matches_played")?,
        strike_rate: optional_real(row_no, row, "strike_rate")?,
        economy_rate: optional_real(row_no, row, "economy_rate")?,
        base_price: require_integer(row_no, row, "base_price")?,
        skill_rating,
    };
    player.validate()?;
    Ok(player)
}

fn type_error(row: usize, column: &str, expected: &'static str, value: &Value) -> ScoutError {
    ScoutError::TypeConversion {
        row,
        column: column.to_string(),
        expected,
        value: value.to_string(),
    }
}

fn require_text(row_no: usize, row: &BatchRow, column: &str) -> Result<String> {
    match &row[column] {
        Value::String(s) => Ok(s.clone()),
        other => Err(type_error(row_no, column, "text", other)),
    }
}

fn optional_text(row_no: usize, row: &BatchRow, column: &str) -> Result<Option<String>> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(type_error(row_no, column, "text", other)),
    }
}

fn require_integer(row_no: usize, row: &BatchRow, column: &str) -> Result<i64> {
    match &row[column] {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| type_error(row_no, column, "integer", &row[column])),
        other => Err(type_error(row_no, column, "integer", other)),
    }
}

fn optional_integer(row_no: usize, row: &BatchRow, column: &str) -> Result<Option<i64>> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| type_error(row_no, column, "integer", &row[column])),
        Some(other) => Err(type_error(row_no, column, "integer", other)),
    }
}

fn optional_u32(row_no: usize, row: &BatchRow, column: &str) -> Result<Option<u32>> {
    match optional_integer(row_no, row, column)? {
        None => Ok(None),
        Some(v) => u32::try_from(v)
            .map(Some)
            .map_err(|_| type_error(row_no, column, "non-negative integer", &row[column])),
    }
}

fn optional_real(row_no: usize, row: &BatchRow, column: &str) -> Result<Option<f64>> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| type_error(row_no, column, "real", &row[column])),
        Some(other) => Err(type_error(row_no, column, "real", other)),
    }
}
