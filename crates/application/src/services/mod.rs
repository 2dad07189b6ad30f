//! Application services - Use case implementations

mod dispatcher;
pub mod reply_formatter;

pub use dispatcher::WeatherDispatcher;
