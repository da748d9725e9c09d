//! ID types for the player registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for registry player IDs.
///
/// IDs are assigned by the store on insert (SQLite AUTOINCREMENT) and are
/// never reused, so they double as a stable insertion order.
///
/// # Examples
///
/// ```rust
/// use auction_scout::PlayerId;
///
/// let id = PlayerId::new(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    /// Create a new PlayerId from an i64 value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
