//! Weather dispatcher - routes inbound chat events to weather queries
//!
//! Decides per event which provider query to issue, consults the freshness
//! cache for city queries, remembers each user's last city for `/forecast`,
//! and sends exactly one reply per handled event.

use std::{fmt, sync::Arc};

use domain::value_objects::{ChatId, GeoLocation, UserId};
use tracing::{debug, error, instrument, warn};

use super::reply_formatter::{
    error_reply, forecast_guidance, help_text, location_error_reply, render_current,
    render_forecast, render_location,
};
use crate::{
    error::{ApplicationError, FailureKind},
    ports::{
        CachePort, CallbackAction, CallbackEvent, ConversationStatePort, InboundEvent,
        LocationShare, MessengerPort, OutgoingMessage, ReplyAffordance, TextMessage, WeatherPort,
    },
};

/// A parsed text message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    /// `/start` or `/help`
    Help,
    /// `/forecast`
    Forecast,
    /// Anything else: a location query
    CityQuery(&'a str),
}

impl<'a> Command<'a> {
    /// Parse trimmed message text; `None` for blank messages
    ///
    /// Commands may carry a `@botname` suffix as sent in group chats.
    /// Unknown slash-commands are treated as location queries.
    fn parse(text: &'a str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let command = text
            .strip_prefix('/')
            .and_then(|rest| rest.split_whitespace().next())
            .map(|word| word.split_once('@').map_or(word, |(name, _)| name));

        Some(match command {
            Some("start" | "help") => Self::Help,
            Some("forecast") => Self::Forecast,
            _ => Self::CityQuery(text),
        })
    }
}

/// Service dispatching chat events to the weather provider
///
/// Holds no per-event state; all shared state lives behind the cache and
/// conversation-state ports, so one instance may serve concurrent events.
pub struct WeatherDispatcher {
    weather: Arc<dyn WeatherPort>,
    messenger: Arc<dyn MessengerPort>,
    cache: Arc<dyn CachePort>,
    state: Arc<dyn ConversationStatePort>,
}

impl fmt::Debug for WeatherDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherDispatcher")
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}

impl WeatherDispatcher {
    /// Create a new dispatcher
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        messenger: Arc<dyn MessengerPort>,
        cache: Arc<dyn CachePort>,
        state: Arc<dyn ConversationStatePort>,
    ) -> Self {
        Self {
            weather,
            messenger,
            cache,
            state,
        }
    }

    /// Handle one inbound event end to end
    ///
    /// Never fails: provider failures become error replies and send
    /// failures are logged.
    #[instrument(
        skip(self, event),
        fields(kind = event.kind(), user_id = %event.user_id(), chat_id = %event.chat_id())
    )]
    pub async fn handle(&self, event: InboundEvent) {
        match event {
            InboundEvent::Text(message) => self.handle_text(message).await,
            InboundEvent::Location(share) => self.handle_location(share).await,
            InboundEvent::Callback(callback) => self.handle_callback(callback).await,
        }
    }

    async fn handle_text(&self, message: TextMessage) {
        let Some(command) = Command::parse(&message.text) else {
            debug!("Ignoring blank message");
            return;
        };

        let reply = match command {
            Command::Help => OutgoingMessage::new(message.chat_id, help_text())
                .with_affordance(ReplyAffordance::RequestLocation),
            Command::Forecast => {
                self.forecast_for_last_location(message.user_id, message.chat_id)
                    .await
            },
            Command::CityQuery(city) => {
                self.current_weather(message.user_id, message.chat_id, city)
                    .await
            },
        };

        self.send(reply).await;
    }

    async fn handle_location(&self, share: LocationShare) {
        let text = match GeoLocation::new(share.latitude, share.longitude) {
            Ok(location) => match self.weather.current_weather_at(&location).await {
                Ok(summary) => render_location(&summary),
                Err(e) => {
                    log_query_failure(&location.to_string(), &e);
                    location_error_reply(&e)
                },
            },
            Err(e) => {
                warn!(
                    latitude = share.latitude,
                    longitude = share.longitude,
                    "Rejected shared location"
                );
                location_error_reply(&ApplicationError::from(e))
            },
        };

        self.send(OutgoingMessage::new(share.chat_id, text)).await;
    }

    async fn handle_callback(&self, callback: CallbackEvent) {
        if let Err(e) = self
            .messenger
            .acknowledge_callback(&callback.callback_id)
            .await
        {
            warn!(error = %e, "Failed to acknowledge callback");
        }

        match CallbackAction::parse(&callback.payload) {
            Some(CallbackAction::Forecast(city)) => {
                let reply = self.forecast(callback.chat_id, &city).await;
                self.send(reply).await;
            },
            None => debug!(payload = %callback.payload, "Ignoring unknown callback"),
        }
    }

    /// City query: cache first, provider on miss
    async fn current_weather(&self, user: UserId, chat: ChatId, city: &str) -> OutgoingMessage {
        let text = if let Some(cached) = self.cache.get(city) {
            debug!(city, "Weather cache hit");
            cached
        } else {
            debug!(city, "Weather cache miss");
            match self.weather.current_weather(city).await {
                Ok(summary) => {
                    let rendered = render_current(&summary);
                    self.cache.set(city, rendered.clone());
                    rendered
                },
                Err(e) => {
                    log_query_failure(city, &e);
                    return OutgoingMessage::new(chat, error_reply(&e));
                },
            }
        };

        self.state.set_last_location(user, city);

        OutgoingMessage::new(chat, text).with_affordance(ReplyAffordance::Forecast {
            city: city.to_string(),
        })
    }

    async fn forecast_for_last_location(&self, user: UserId, chat: ChatId) -> OutgoingMessage {
        match self.state.last_location(user) {
            Some(city) => self.forecast(chat, &city).await,
            None => OutgoingMessage::new(chat, forecast_guidance()),
        }
    }

    async fn forecast(&self, chat: ChatId, city: &str) -> OutgoingMessage {
        match self.weather.forecast(city).await {
            Ok(series) => OutgoingMessage::new(chat, render_forecast(&series)),
            Err(e) => {
                log_query_failure(city, &e);
                OutgoingMessage::new(chat, error_reply(&e))
            },
        }
    }

    async fn send(&self, message: OutgoingMessage) {
        let chat_id = message.chat_id;
        if let Err(e) = self.messenger.send_message(message).await {
            error!(%chat_id, error = %e, "Failed to send reply");
        }
    }
}

fn log_query_failure(location: &str, error: &ApplicationError) {
    let kind = error.failure_kind().map_or("other", FailureKind::as_str);
    warn!(location, kind, error = %error, "Weather query failed");
}
