//! In-memory conversation state
//!
//! Per-user last queried location. State lives for the lifetime of the
//! process; a restart forgets every user.

use std::collections::HashMap;

use application::ports::ConversationStatePort;
use domain::UserId;
use parking_lot::RwLock;
use tracing::debug;

/// Conversation state held in a `HashMap` behind a read-write lock
#[derive(Debug, Default)]
pub struct InMemoryConversationStateStore {
    last_locations: RwLock<HashMap<UserId, String>>,
}

impl InMemoryConversationStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a remembered location
    #[must_use]
    pub fn len(&self) -> usize {
        self.last_locations.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_locations.read().is_empty()
    }
}

impl ConversationStatePort for InMemoryConversationStateStore {
    fn set_last_location(&self, user: UserId, location: &str) {
        debug!(user_id = %user, location = %location, "Remembering last location");
        self.last_locations
            .write()
            .insert(user, location.to_string());
    }

    fn last_location(&self, user: UserId) -> Option<String> {
        self.last_locations.read().get(&user).cloned()
    }
}
