//! Handlers for manual entry and filtered listing.

use crate::cli::types::SkillRating;
use crate::storage::{NewPlayer, PlayerFilters, ScoutDatabase};
use anyhow::Result;

/// Input collected from the `add` subcommand.
pub struct AddParams {
    pub name: String,
    pub role: String,
    pub base_price: i64,
    pub rating: SkillRating,
    pub nationality: Option<String>,
    pub age: Option<u32>,
    pub matches: Option<u32>,
    pub strike_rate: Option<f64>,
    pub economy: Option<f64>,
}

/// Insert a single player and report the assigned id.
pub fn handle_add(db: &mut ScoutDatabase, params: AddParams) -> Result<()> {
    let player = NewPlayer {
        name: params.name,
        nationality: params.nationality,
        role: params.role,
        age: params.age,
        matches_played: params.matches,
        strike_rate: params.strike_rate,
        economy_rate: params.economy,
        base_price: params.base_price,
        skill_rating: params.rating,
    };

    let id = db.insert_player(&player)?;
    println!("Added {} (id {})", player.name, id);
    Ok(())
}

/// List players matching the filters, as a table or JSON.
pub fn handle_list(db: &ScoutDatabase, filters: PlayerFilters, as_json: bool) -> Result<()> {
    let players = db.fetch_players(&filters)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        if filters.is_empty() {
            println!("Registry is empty.");
        } else {
            println!("No players matched the given filters.");
        }
        return Ok(());
    }

    println!(
        "{:>4}  {:<20} {:<14} {:<13} {:>3} {:>4} {:>7} {:>6} {:>8} {:>6}  {:<9} {:>8}",
        "ID", "Name", "Nation", "Role", "Age", "M", "SR", "Econ", "Base(L)", "Rating", "Status", "Sold(L)"
    );
    for p in &players {
        println!(
            "{:>4}  {:<20} {:<14} {:<13} {:>3} {:>4} {:>7.2} {:>6.2} {:>8} {:>5}/10  {:<9} {:>8}",
            p.id,
            p.name,
            p.nationality,
            p.role,
            p.age,
            p.matches_played,
            p.strike_rate,
            p.economy_rate,
            p.base_price,
            p.skill_rating,
            p.auction_status,
            p.final_price,
        );
    }
    println!("{} players", players.len());
    Ok(())
}
