//! Handler for the summary metrics view.

use crate::storage::ScoutDatabase;
use anyhow::Result;

/// Print registry summary metrics as text lines or JSON.
pub fn handle_stats(db: &ScoutDatabase, as_json: bool) -> Result<()> {
    let stats = db.get_stats()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total players:   {}", stats.total_players);
    println!("Avg base price:  {:.1} L", stats.avg_base_price);
    println!("Highest rating:  {}/10", stats.max_skill_rating);

    if !stats.role_distribution.is_empty() {
        println!("Role distribution:");
        for entry in &stats.role_distribution {
            println!("  {:<14} {}", entry.role, entry.count);
        }
    }
    Ok(())
}
