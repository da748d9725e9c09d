//! Entry point: parse CLI and dispatch to command handlers.

use auction_scout::{
    cli::{Commands, Scout},
    commands::{
        admin::{handle_import, handle_init},
        auction::{handle_reset, handle_simulate},
        open_registry,
        players::{handle_add, handle_list, AddParams},
        stats::handle_stats,
    },
};
use clap::Parser;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Scout::parse();
    let mut db = open_registry(app.db)?;

    match app.command {
        Commands::Init { force } => handle_init(&mut db, force)?,

        Commands::Add {
            name,
            role,
            base_price,
            rating,
            nationality,
            age,
            matches,
            strike_rate,
            economy,
        } => handle_add(
            &mut db,
            AddParams {
                name,
                role,
                base_price,
                rating,
                nationality,
                age,
                matches,
                strike_rate,
                economy,
            },
        )?,

        Commands::List { filters, json } => handle_list(&db, filters.into(), json)?,

        Commands::Import { file } => handle_import(&mut db, &file)?,

        Commands::Simulate { seed } => handle_simulate(&mut db, seed)?,

        Commands::Reset => handle_reset(&mut db)?,

        Commands::Stats { json } => handle_stats(&db, json)?,
    }

    Ok(())
}
