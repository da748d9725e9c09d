//! Data models for the storage layer

use crate::cli::types::{AuctionStatus, PlayerId, SkillRating};
use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};

/// Defaults applied to optional fields on insert and batch import.
pub mod defaults {
    pub const NATIONALITY: &str = "Unknown";
    pub const AGE: u32 = 25;
    pub const MATCHES_PLAYED: u32 = 0;
    pub const STRIKE_RATE: f64 = 0.0;
    pub const ECONOMY_RATE: f64 = 0.0;
}

/// A player record as persisted in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub nationality: String,
    pub role: String,
    pub age: u32,
    pub matches_played: u32,
    pub strike_rate: f64,
    pub economy_rate: f64,
    pub base_price: i64,
    pub skill_rating: SkillRating,
    pub auction_status: AuctionStatus,
    /// Meaningful only when `auction_status` is `Sold`; otherwise 0.
    pub final_price: i64,
}

/// Input for a single insert; `None` fields take the [`defaults`] values.
///
/// `role` and `nationality` are free text on purpose: the registry displays
/// the four canonical roles but does not reject others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub nationality: Option<String>,
    pub role: String,
    pub age: Option<u32>,
    pub matches_played: Option<u32>,
    pub strike_rate: Option<f64>,
    pub economy_rate: Option<f64>,
    pub base_price: i64,
    pub skill_rating: SkillRating,
}

impl NewPlayer {
    /// Check required fields before anything touches the store.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ScoutError::Validation {
                field: "name",
                message: "must not be empty".to_string(),
            });
        }
        if self.role.trim().is_empty() {
            return Err(ScoutError::Validation {
                field: "role",
                message: "must not be empty".to_string(),
            });
        }
        if self.base_price <= 0 {
            return Err(ScoutError::Validation {
                field: "base_price",
                message: format!("must be positive, got {}", self.base_price),
            });
        }
        Ok(())
    }
}

/// Filter configuration for [`fetch_players`](super::schema::ScoutDatabase::fetch_players).
///
/// Absent/empty filters impose no restriction; provided filters compose
/// with logical AND.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilters {
    /// Case-insensitive substring match on `name`.
    pub search: Option<String>,
    /// Record matches if its role is any of these.
    pub roles: Vec<String>,
    /// Record matches if its nationality is any of these.
    pub nationalities: Vec<String>,
    /// Inclusive lower bound on `base_price`.
    pub price_min: Option<i64>,
    /// Inclusive upper bound on `base_price`.
    pub price_max: Option<i64>,
    /// Inclusive lower bound on `skill_rating`.
    pub rating_min: Option<u8>,
}

impl PlayerFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.roles.is_empty()
            && self.nationalities.is_empty()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.rating_min.is_none()
    }
}

/// Summary metrics over the whole registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_players: u64,
    /// 0.0 when the store is empty.
    pub avg_base_price: f64,
    /// 0 when the store is empty.
    pub max_skill_rating: u8,
    /// One entry per role present in the store, ordered by role name.
    pub role_distribution: Vec<RoleCount>,
}

/// Count of players carrying a given role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: String,
    pub count: u64,
}
