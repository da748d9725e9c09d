//! Typed values shared between the CLI and the storage layer.

pub mod ids;
pub mod rating;
pub mod status;

pub use ids::PlayerId;
pub use rating::SkillRating;
pub use status::AuctionStatus;
