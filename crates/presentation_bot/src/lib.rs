//! Telegram front end of the weather bot
//!
//! Converts teloxide updates into application events and hands them to the
//! `WeatherDispatcher`.

pub mod handlers;

pub use handlers::{HandlerResult, schema};
