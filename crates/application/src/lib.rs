//! Application layer - Use cases and orchestration
//!
//! Contains the weather dispatcher, reply formatting, and the port
//! definitions that infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, FailureKind};
pub use ports::*;
pub use services::*;
