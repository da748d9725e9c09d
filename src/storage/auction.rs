//! The randomized sold/unsold valuation pass.
//!
//! Higher-rated players rarely go unsold and command a larger multiplier on
//! their base price. The RNG is injected so tests can seed it and assert
//! exact outcomes.

use super::schema::ScoutDatabase;
use crate::cli::types::AuctionStatus;
use crate::error::Result;
use rand::Rng;
use rusqlite::params;

/// Ratings above this sell with probability 0.7 instead of 0.4.
const HIGH_RATING: u8 = 7;

impl ScoutDatabase {
    /// Run one valuation pass over every `Available` record.
    ///
    /// Each eligible record is marked `Sold` or `Unsold`; sold records get a
    /// final price of at least their base price. Records already decided are
    /// untouched, so running twice without a reset is a no-op for them. All
    /// outcomes are drawn first and applied in a single transaction. Returns
    /// the number of records transitioned.
    pub fn simulate_auction<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let mut stmt = self.conn.prepare(
            "SELECT id, base_price, skill_rating FROM players WHERE auction_status = ?",
        )?;
        let rows = stmt.query_map(params![AuctionStatus::Available], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, u8>(2)?,
            ))
        })?;

        let mut lots = Vec::new();
        for row in rows {
            lots.push(row?);
        }
        drop(stmt);

        let outcomes: Vec<(AuctionStatus, i64, i64)> = lots
            .into_iter()
            .map(|(id, base_price, rating)| {
                let (status, final_price) = draw_outcome(rng, base_price, rating);
                (status, final_price, id)
            })
            .collect();

        let tx = self.conn.transaction()?;
        {
            let mut update = tx.prepare(
                "UPDATE players SET auction_status = ?, final_price = ? WHERE id = ?",
            )?;
            for (status, final_price, id) in &outcomes {
                update.execute(params![status, final_price, id])?;
            }
        }
        tx.commit()?;

        Ok(outcomes.len())
    }
}

/// Decide a single lot's fate.
fn draw_outcome<R: Rng + ?Sized>(rng: &mut R, base_price: i64, rating: u8) -> (AuctionStatus, i64) {
    let luck: f64 = rng.random();
    let sold_threshold = if rating > HIGH_RATING { 0.3 } else { 0.6 };

    if luck > sold_threshold {
        let multiplier = 1.0 + (rating as f64 / 10.0) * rng.random_range(1.0..4.0);
        (AuctionStatus::Sold, hammer_price(base_price, multiplier))
    } else {
        (AuctionStatus::Unsold, 0)
    }
}

/// Compute the sale price from the base price and a multiplier >= 1.
///
/// The product is truncated to an integer, then rounded to the nearest
/// multiple of 5 (integer remainders of 3 or 4 round up; exact midpoints
/// cannot occur on integers). The result is clamped to the base price so a
/// sold lot never fetches less than its starting valuation.
fn hammer_price(base_price: i64, multiplier: f64) -> i64 {
    let raw = (base_price as f64 * multiplier) as i64;
    let rounded = (raw + 2) / 5 * 5;
    rounded.max(base_price)
}
