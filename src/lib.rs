//! Auction Scout CLI Library
//!
//! A player registry and mock-auction simulator: stores candidate records in
//! a local SQLite database, supports filtered retrieval, and runs a
//! randomized sold/unsold valuation pass over available records.
//!
//! ## Features
//!
//! - **Record Store**: durable player table with monotonic id assignment
//! - **Query Engine**: AND-composed, fully parameterized filters
//! - **Batch Loader**: all-or-nothing bulk import of tabular rows
//! - **Auction Simulator**: randomized pricing with an injectable RNG
//! - **Stats Aggregator**: counts, averages, and role distributions
//!
//! ## Quick Start
//!
//! ```rust
//! use auction_scout::{
//!     storage::{NewPlayer, PlayerFilters, ScoutDatabase},
//!     SkillRating,
//! };
//!
//! # fn example() -> auction_scout::Result<()> {
//! let mut db = ScoutDatabase::open_in_memory()?;
//!
//! db.insert_player(&NewPlayer {
//!     name: "MS Dhoni".to_string(),
//!     nationality: Some("India".to_string()),
//!     role: "Wicketkeeper".to_string(),
//!     age: Some(38),
//!     matches_played: Some(350),
//!     strike_rate: Some(135.2),
//!     economy_rate: None,
//!     base_price: 200,
//!     skill_rating: SkillRating::new(10)?,
//! })?;
//!
//! let everyone = db.fetch_players(&PlayerFilters::default())?;
//! assert_eq!(everyone.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{AuctionStatus, PlayerId, SkillRating};
pub use error::{Result, ScoutError};
