//! User identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the person talking to the bot
///
/// Stable for the lifetime of a chat session; used as the key for
/// per-user conversation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a user ID from the platform's numeric identifier
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric identifier
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
