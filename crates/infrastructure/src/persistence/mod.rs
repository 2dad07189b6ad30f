//! Persistence module
//!
//! Process-local storage for per-user conversation state.

mod conversation_state_store;

pub use conversation_state_store::InMemoryConversationStateStore;
