//! Update conversion
//!
//! Maps the fields the bot reads from a Telegram update onto
//! [`InboundEvent`]. Kept free of teloxide types so it can be tested
//! without building updates.

use application::ports::{CallbackEvent, InboundEvent, LocationShare, TextMessage};
use domain::{ChatId, UserId};

/// Key for per-user state
///
/// Telegram user ids fit in 52 bits; messages without a sender (channel
/// posts) fall back to the chat id, which equals the user id in private
/// chats.
pub fn user_key(from: Option<u64>, chat_id: i64) -> UserId {
    let id = from
        .and_then(|id| i64::try_from(id).ok())
        .unwrap_or(chat_id);
    UserId::new(id)
}

/// Convert a message; `None` for messages without text or location
///
/// A location wins over text; Telegram never sends both.
pub fn message_event(
    chat_id: i64,
    from: Option<u64>,
    text: Option<&str>,
    location: Option<(f64, f64)>,
) -> Option<InboundEvent> {
    let user_id = user_key(from, chat_id);
    let chat_id = ChatId::new(chat_id);

    if let Some((latitude, longitude)) = location {
        return Some(InboundEvent::Location(LocationShare {
            user_id,
            chat_id,
            latitude,
            longitude,
        }));
    }

    text.map(|text| {
        InboundEvent::Text(TextMessage {
            user_id,
            chat_id,
            text: text.to_string(),
        })
    })
}

/// Convert a callback query
///
/// The reply goes to the chat of the message carrying the button, or to
/// the user's private chat when that message is unavailable. Missing data
/// becomes an empty payload, which the dispatcher acknowledges and ignores.
pub fn callback_event(
    callback_id: &str,
    from: u64,
    chat_id: Option<i64>,
    data: Option<&str>,
) -> InboundEvent {
    let user_id = user_key(Some(from), chat_id.unwrap_or_default());
    let chat_id = ChatId::new(chat_id.unwrap_or_else(|| user_id.value()));

    InboundEvent::Callback(CallbackEvent {
        user_id,
        chat_id,
        callback_id: callback_id.to_string(),
        payload: data.unwrap_or_default().to_string(),
    })
}
