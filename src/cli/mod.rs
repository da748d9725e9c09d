//! CLI argument definitions and parsing structures.

pub mod types;

use crate::storage::PlayerFilters;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::SkillRating;

/// Filtering arguments for the `list` command, mirroring the query engine.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Case-insensitive substring match on player name.
    #[clap(long, short = 's')]
    pub search: Option<String>,

    /// Filter by role (repeatable): `-r Batsman -r Bowler`.
    /// Canonical roles are Batsman, Bowler, All-rounder, Wicketkeeper.
    #[clap(long = "role", short = 'r')]
    pub roles: Vec<String>,

    /// Filter by nationality (repeatable): `-n India -n Australia`.
    #[clap(long = "nationality", short = 'n')]
    pub nationalities: Vec<String>,

    /// Inclusive lower bound on base price (lakhs).
    #[clap(long)]
    pub price_min: Option<i64>,

    /// Inclusive upper bound on base price (lakhs).
    #[clap(long)]
    pub price_max: Option<i64>,

    /// Inclusive lower bound on skill rating (1-10).
    #[clap(long)]
    pub rating_min: Option<u8>,
}

impl From<FilterArgs> for PlayerFilters {
    fn from(args: FilterArgs) -> Self {
        PlayerFilters {
            search: args.search,
            roles: args.roles,
            nationalities: args.nationalities,
            price_min: args.price_min,
            price_max: args.price_max,
            rating_min: args.rating_min,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "auction-scout", about = "Player registry and mock-auction simulator")]
pub struct Scout {
    /// Path to the registry database (defaults to the platform data dir).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ensure the registry schema exists (never touches existing records).
    ///
    /// With `--force`, drops and recreates the table instead — every stored
    /// record is discarded.
    Init {
        /// Destructively recreate the schema, discarding all records.
        #[clap(long)]
        force: bool,
    },

    /// Add a single player to the registry.
    Add {
        /// Player name.
        name: String,

        /// Playing role (Batsman, Bowler, All-rounder, Wicketkeeper, or free text).
        #[clap(long, short)]
        role: String,

        /// Starting valuation in lakhs (must be positive).
        #[clap(long, short)]
        base_price: i64,

        /// Skill rating from 1 to 10.
        #[clap(long, value_parser = clap::value_parser!(SkillRating))]
        rating: SkillRating,

        /// Nationality (defaults to "Unknown").
        #[clap(long, short = 'n')]
        nationality: Option<String>,

        /// Age in years (defaults to 25).
        #[clap(long)]
        age: Option<u32>,

        /// Matches played (defaults to 0).
        #[clap(long)]
        matches: Option<u32>,

        /// Batting strike rate (defaults to 0.0).
        #[clap(long)]
        strike_rate: Option<f64>,

        /// Bowling economy rate (defaults to 0.0).
        #[clap(long)]
        economy: Option<f64>,
    },

    /// List players, optionally filtered.
    List {
        #[clap(flatten)]
        filters: FilterArgs,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Bulk-import players from a JSON file (array of row objects).
    ///
    /// Rows must carry name, role, base_price and skill_rating; other
    /// columns fall back to the single-insert defaults. The whole batch is
    /// rejected if any row is malformed.
    Import {
        /// Path to a JSON array of player rows.
        file: PathBuf,
    },

    /// Run a valuation pass over every Available player.
    ///
    /// Each one is randomly marked Sold (with a final price derived from its
    /// base price and rating) or Unsold. Already-decided players are skipped.
    Simulate {
        /// Seed the random source for a reproducible pass.
        #[clap(long)]
        seed: Option<u64>,
    },

    /// Revert every player to Available and clear final prices.
    Reset,

    /// Show summary metrics for the registry.
    Stats {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
