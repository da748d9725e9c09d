//! Auction lifecycle states.

use crate::error::ScoutError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three lifecycle states of a registry record.
///
/// Records enter the store as `Available`; a simulation pass moves them to
/// `Sold` or `Unsold`, and a reset moves everything back to `Available`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionStatus {
    #[default]
    Available,
    Sold,
    Unsold,
}

impl AuctionStatus {
    /// The exact string stored in the `auction_status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Available => "Available",
            AuctionStatus::Sold => "Sold",
            AuctionStatus::Unsold => "Unsold",
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuctionStatus {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(AuctionStatus::Available),
            "Sold" => Ok(AuctionStatus::Sold),
            "Unsold" => Ok(AuctionStatus::Unsold),
            _ => Err(ScoutError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

impl ToSql for AuctionStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for AuctionStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: ScoutError| FromSqlError::Other(Box::new(e)))
    }
}
