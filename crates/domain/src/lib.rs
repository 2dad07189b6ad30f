//! Domain layer for the weather bot
//!
//! Contains the weather entities, value objects, and domain errors.
//! This layer knows nothing about HTTP, Telegram, or caching.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
