//! Handlers for the simulation pass and the auction reset.

use crate::storage::ScoutDatabase;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Run one valuation pass, optionally seeded for reproducibility.
pub fn handle_simulate(db: &mut ScoutDatabase, seed: Option<u64>) -> Result<()> {
    let updated = match seed {
        Some(seed) => db.simulate_auction(&mut StdRng::seed_from_u64(seed))?,
        None => db.simulate_auction(&mut rand::rng())?,
    };

    if updated == 0 {
        println!("No players were available to auction. Run `reset` to re-open past lots.");
    } else {
        println!("Simulation complete. Updated {} players.", updated);
    }
    Ok(())
}

/// Revert every record to Available with a cleared final price.
pub fn handle_reset(db: &mut ScoutDatabase) -> Result<()> {
    let count = db.reset_auction()?;
    println!("Auction reset. {} players are now Available.", count);
    Ok(())
}
