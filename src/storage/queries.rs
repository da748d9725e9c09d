//! Basic database query operations

use super::{models::*, schema::ScoutDatabase};
use crate::cli::types::{AuctionStatus, PlayerId};
use crate::error::Result;
use rusqlite::{params, Row};

impl ScoutDatabase {
    /// Insert a single player record.
    ///
    /// Required fields are validated before the write, optional fields fall
    /// back to the registry defaults, and the record always enters the store
    /// as `Available` with a zero final price. Returns the assigned id.
    pub fn insert_player(&mut self, player: &NewPlayer) -> Result<PlayerId> {
        player.validate()?;

        self.conn.execute(
            "INSERT INTO players (name, nationality, role, age, matches_played,
                                  strike_rate, economy_rate, base_price, skill_rating,
                                  auction_status, final_price)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
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
            ],
        )?;

        Ok(PlayerId::new(self.conn.last_insert_rowid()))
    }

    /// Fetch players matching the given filters, in insertion order.
    ///
    /// Every filter value is bound as a statement parameter; nothing from the
    /// caller is ever spliced into the query text.
    pub fn fetch_players(&self, filters: &PlayerFilters) -> Result<Vec<Player>> {
        let mut query = String::from(
            "SELECT id, name, nationality, role, age, matches_played,
                    strike_rate, economy_rate, base_price, skill_rating,
                    auction_status, final_price
             FROM players WHERE 1=1",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(search) = &filters.search {
            if !search.is_empty() {
                // LIKE is case-insensitive for ASCII in SQLite
                query.push_str(" AND name LIKE ?");
                params.push(Box::new(format!("%{}%", search)));
            }
        }

        if !filters.roles.is_empty() {
            query.push_str(" AND role IN (");
            for (i, role) in filters.roles.iter().enumerate() {
                if i > 0 {
                    query.push_str(", ");
                }
                query.push('?');
                params.push(Box::new(role.clone()));
            }
            query.push(')');
        }

        if !filters.nationalities.is_empty() {
            query.push_str(" AND nationality IN (");
            for (i, nationality) in filters.nationalities.iter().enumerate() {
                if i > 0 {
                    query.push_str(", ");
                }
                query.push('?');
                params.push(Box::new(nationality.clone()));
            }
            query.push(')');
        }

        if let Some(price_min) = filters.price_min {
            query.push_str(" AND base_price >= ?");
            params.push(Box::new(price_min));
        }

        if let Some(price_max) = filters.price_max {
            query.push_str(" AND base_price <= ?");
            params.push(Box::new(price_max));
        }

        if let Some(rating_min) = filters.rating_min {
            query.push_str(" AND skill_rating >= ?");
            params.push(Box::new(rating_min as i64));
        }

        query.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            Self::row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Revert every record to `Available` with a zero final price,
    /// regardless of its current status. Returns the row count touched.
    pub fn reset_auction(&mut self) -> Result<usize> {
        let count = self.conn.execute(
            "UPDATE players SET auction_status = ?, final_price = 0",
            params![AuctionStatus::Available],
        )?;
        Ok(count)
    }

    /// Compute summary metrics over the whole registry.
    ///
    /// Safe on an empty store: averages and maxima fall back to zero.
    pub fn get_stats(&self) -> Result<StoreStats> {
        let (total_players, avg_base_price, max_skill_rating): (u64, Option<f64>, Option<u8>) =
            self.conn.query_row(
                "SELECT COUNT(*), AVG(base_price), MAX(skill_rating) FROM players",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )?;

        let mut stmt = self.conn.prepare(
            "SELECT role, COUNT(*) FROM players GROUP BY role ORDER BY role",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RoleCount {
                role: row.get(0)?,
                count: row.get(1)?,
            })
        })?;

        let mut role_distribution = Vec::new();
        for row in rows {
            role_distribution.push(row?);
        }

        Ok(StoreStats {
            total_players,
            avg_base_price: avg_base_price.unwrap_or(0.0),
            max_skill_rating: max_skill_rating.unwrap_or(0),
            role_distribution,
        })
    }

    /// Helper to convert a database row to a Player.
    pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            id: PlayerId::new(row.get(0)?),
            name: row.get(1)?,
            nationality: row.get(2)?,
            role: row.get(3)?,
            age: row.get(4)?,
            matches_played: row.get(5)?,
            strike_rate: row.get(6)?,
            economy_rate: row.get(7)?,
            base_price: row.get(8)?,
            skill_rating: row.get(9)?,
            auction_status: row.get(10)?,
            final_price: row.get(11)?,
        })
    }
}
