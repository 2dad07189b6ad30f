//! Update handlers
//!
//! Two endpoints: one for messages, one for callback queries. Both convert
//! the update and forward it to the dispatcher; the dispatcher reports its
//! own failures, so the endpoints never return an error.

pub mod events;

use std::{error::Error, sync::Arc};

use application::WeatherDispatcher;
use teloxide::{dispatching::UpdateHandler, prelude::*};
use tracing::debug;

/// Result type of the teloxide endpoints
pub type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

/// The update routing tree
pub fn schema() -> UpdateHandler<Box<dyn Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler))
}

async fn message_handler(msg: Message, dispatcher: Arc<WeatherDispatcher>) -> HandlerResult {
    let event = events::message_event(
        msg.chat.id.0,
        msg.from.as_ref().map(|user| user.id.0),
        msg.text(),
        msg.location().map(|l| (l.latitude, l.longitude)),
    );

    match event {
        Some(event) => dispatcher.handle(event).await,
        None => debug!(chat_id = msg.chat.id.0, "Ignoring message without text or location"),
    }
    Ok(())
}

async fn callback_handler(q: CallbackQuery, dispatcher: Arc<WeatherDispatcher>) -> HandlerResult {
    let event = events::callback_event(
        &q.id,
        q.from.id.0,
        q.message.as_ref().map(|m| m.chat().id.0),
        q.data.as_deref(),
    );

    dispatcher.handle(event).await;
    Ok(())
}
