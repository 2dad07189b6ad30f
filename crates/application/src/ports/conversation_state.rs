//! Conversation state port
//!
//! Remembers the last location each user asked about so that `/forecast`
//! can be answered without repeating the city.

use domain::value_objects::UserId;
#[cfg(test)]
use mockall::automock;

/// Port for per-user conversation state
///
/// Entries never expire. Writes for one user never affect another.
#[cfg_attr(test, automock)]
pub trait ConversationStatePort: Send + Sync {
    /// Record `location` as the user's last query, replacing any previous one
    fn set_last_location(&self, user: UserId, location: &str);

    /// The user's last queried location, if any
    fn last_location(&self, user: UserId) -> Option<String>;
}
