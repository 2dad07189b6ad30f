//! Messenger port - Interface to the chat platform
//!
//! Inbound events are converted by the presentation layer into
//! [`InboundEvent`]; replies leave through [`MessengerPort`]. Platform
//! details such as keyboard layouts stay behind the adapter.

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::value_objects::{ChatId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Prefix of callback payloads produced by the forecast button
pub const FORECAST_CALLBACK_PREFIX: &str = "forecast:";

/// A plain text message (commands included)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMessage {
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub text: String,
}

/// A shared location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationShare {
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
}

/// A button press on an inline keyboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackEvent {
    pub user_id: UserId,
    pub chat_id: ChatId,
    /// Platform identifier used to acknowledge the press
    pub callback_id: String,
    /// Opaque data attached to the pressed button
    pub payload: String,
}

/// Any event the dispatcher knows how to handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    Text(TextMessage),
    Location(LocationShare),
    Callback(CallbackEvent),
}

impl InboundEvent {
    /// The user who triggered the event
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        match self {
            Self::Text(m) => m.user_id,
            Self::Location(l) => l.user_id,
            Self::Callback(c) => c.user_id,
        }
    }

    /// The chat replies should go to
    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        match self {
            Self::Text(m) => m.chat_id,
            Self::Location(l) => l.chat_id,
            Self::Callback(c) => c.chat_id,
        }
    }

    /// Short label for log fields
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Location(_) => "location",
            Self::Callback(_) => "callback",
        }
    }
}

/// Interactive element attached to a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyAffordance {
    /// Button asking the user to share their location
    RequestLocation,
    /// Button that requests the forecast for `city`
    Forecast { city: String },
}

impl ReplyAffordance {
    /// Callback payload carried by the button, if it has one
    #[must_use]
    pub fn callback_data(&self) -> Option<String> {
        match self {
            Self::RequestLocation => None,
            Self::Forecast { city } => Some(format!("{FORECAST_CALLBACK_PREFIX}{city}")),
        }
    }
}

/// What a callback payload asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// Show the forecast for the given city
    Forecast(String),
}

impl CallbackAction {
    /// Parse a callback payload
    ///
    /// Returns `None` for unknown payloads and for a forecast payload
    /// without a city.
    #[must_use]
    pub fn parse(payload: &str) -> Option<Self> {
        payload
            .strip_prefix(FORECAST_CALLBACK_PREFIX)
            .filter(|city| !city.is_empty())
            .map(|city| Self::Forecast(city.to_string()))
    }
}

/// An outgoing reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affordances: Vec<ReplyAffordance>,
}

impl OutgoingMessage {
    /// Create a plain text reply
    #[must_use]
    pub fn new(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            affordances: Vec::new(),
        }
    }

    /// Attach an interactive element
    #[must_use]
    pub fn with_affordance(mut self, affordance: ReplyAffordance) -> Self {
        self.affordances.push(affordance);
        self
    }
}

/// Port for sending replies through the chat platform
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessengerPort: Send + Sync {
    /// Send a reply, rendering its affordances as platform buttons
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), ApplicationError>;

    /// Acknowledge a button press so the client stops its loading indicator
    async fn acknowledge_callback(&self, callback_id: &str) -> Result<(), ApplicationError>;
}
