//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod conversation_state;
mod messenger_port;
mod weather_port;

#[cfg(test)]
pub use cache_port::MockCachePort;
pub use cache_port::{CachePort, CacheStats, ttl};
#[cfg(test)]
pub use conversation_state::MockConversationStatePort;
pub use conversation_state::ConversationStatePort;
#[cfg(test)]
pub use messenger_port::MockMessengerPort;
pub use messenger_port::{
    CallbackAction, CallbackEvent, FORECAST_CALLBACK_PREFIX, InboundEvent, LocationShare,
    MessengerPort, OutgoingMessage, ReplyAffordance, TextMessage,
};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
