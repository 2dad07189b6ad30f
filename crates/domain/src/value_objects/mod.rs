//! Value Objects - Immutable, identity-less domain primitives

mod chat_id;
mod geo_location;
mod humidity;
mod user_id;

pub use chat_id::ChatId;
pub use geo_location::GeoLocation;
pub use humidity::Humidity;
pub use user_id::UserId;
