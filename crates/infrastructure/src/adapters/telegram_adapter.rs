//! Telegram adapter - Implements MessengerPort using integration_telegram
//!
//! Turns reply affordances into Telegram keyboards. A Telegram message
//! carries a single `reply_markup`, so inline buttons win over the
//! location request when a reply asks for both.

use application::error::ApplicationError;
use application::ports::{MessengerPort, OutgoingMessage, ReplyAffordance};
use async_trait::async_trait;
use integration_telegram::{InlineButton, ReplyKeyboard, TelegramClient, TelegramError};
use tracing::{instrument, warn};

/// Label of the inline button that requests a forecast
pub const FORECAST_BUTTON_LABEL: &str = "🔮 5-day forecast";

/// Label of the reply-keyboard button that shares the user's location
pub const LOCATION_BUTTON_LABEL: &str = "📍 Share location";

/// Adapter for sending replies through the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramMessenger {
    client: TelegramClient,
}

impl TelegramMessenger {
    pub const fn new(client: TelegramClient) -> Self {
        Self { client }
    }

    /// Map Telegram error to application error
    fn map_error(err: TelegramError) -> ApplicationError {
        ApplicationError::Messaging(err.to_string())
    }

    /// Build the keyboard for a reply, if it has any affordances
    ///
    /// Buttons whose callback data does not fit Telegram's limit are left
    /// out; the text reply still goes through.
    fn keyboard_for(affordances: &[ReplyAffordance]) -> Option<ReplyKeyboard> {
        let mut inline = Vec::new();
        let mut request_location = false;

        for affordance in affordances {
            match affordance {
                ReplyAffordance::RequestLocation => request_location = true,
                ReplyAffordance::Forecast { city } => {
                    let Some(data) = affordance.callback_data() else {
                        continue;
                    };
                    match InlineButton::new(FORECAST_BUTTON_LABEL, data) {
                        Ok(button) => inline.push(button),
                        Err(e) => {
                            warn!(city = %city, error = %e, "Dropping forecast button");
                        },
                    }
                },
            }
        }

        if !inline.is_empty() {
            Some(ReplyKeyboard::Inline(inline))
        } else if request_location {
            Some(ReplyKeyboard::RequestLocation {
                label: LOCATION_BUTTON_LABEL.to_string(),
            })
        } else {
            None
        }
    }
}

#[async_trait]
impl MessengerPort for TelegramMessenger {
    #[instrument(skip(self, message), fields(chat_id = %message.chat_id))]
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), ApplicationError> {
        let keyboard = Self::keyboard_for(&message.affordances);
        self.client
            .send_text(message.chat_id.value(), &message.text, keyboard)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn acknowledge_callback(&self, callback_id: &str) -> Result<(), ApplicationError> {
        self.client
            .answer_callback(callback_id)
            .await
            .map_err(Self::map_error)
    }
}
