//! Skill rating type with range validation.

use crate::error::{Result, ScoutError};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 1-10 quality score that drives sale probability and the price multiplier.
///
/// Construction goes through [`SkillRating::new`], so a value held by this
/// type is always inside the valid range.
///
/// # Examples
///
/// ```rust
/// use auction_scout::SkillRating;
///
/// let rating = SkillRating::new(8).unwrap();
/// assert_eq!(rating.as_u8(), 8);
/// assert!(SkillRating::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillRating(u8);

impl SkillRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Create a rating, rejecting values outside 1-10.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoutError::InvalidRating {
                value: value.to_string(),
            })
        }
    }

    /// Get the underlying u8 value.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SkillRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SkillRating {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s.parse().map_err(|_| ScoutError::InvalidRating {
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<u8> for SkillRating {
    type Error = ScoutError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SkillRating> for u8 {
    fn from(rating: SkillRating) -> u8 {
        rating.0
    }
}

impl ToSql for SkillRating {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0 as i64))
    }
}

impl FromSql for SkillRating {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_i64()?;
        let narrowed = u8::try_from(raw).map_err(|_| FromSqlError::OutOfRange(raw))?;
        Self::new(narrowed).map_err(|_| FromSqlError::OutOfRange(raw))
    }
}
