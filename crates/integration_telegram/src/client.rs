//! Telegram client
//!
//! Wraps a `teloxide::Bot` so the rest of the workspace never builds
//! Bot API requests directly.

use std::fmt;

use teloxide::{RequestError, prelude::*};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::keyboard::{MAX_CALLBACK_DATA_LEN, ReplyKeyboard};

/// Telegram client errors
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Bot API request failed (network, API error, or rate limit)
    #[error("Telegram request failed: {0}")]
    Request(#[from] RequestError),

    /// Inline button payload too large for Telegram
    #[error("Callback data is {len} bytes, Telegram allows at most {max}", max = MAX_CALLBACK_DATA_LEN)]
    CallbackDataTooLong { len: usize },
}

/// Telegram Bot API client
#[derive(Clone)]
pub struct TelegramClient {
    bot: Bot,
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient").finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a client for the given bot token
    pub fn new(token: &str) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }

    /// The underlying bot handle, for running the update dispatcher
    pub fn bot(&self) -> Bot {
        self.bot.clone()
    }

    /// Send a text message, optionally with a keyboard
    #[instrument(skip(self, text, keyboard), fields(text_len = text.len()))]
    pub async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<ReplyKeyboard>,
    ) -> Result<(), TelegramError> {
        let request = self.bot.send_message(ChatId(chat_id), text);
        let request = match keyboard {
            Some(keyboard) => request.reply_markup(keyboard.into_markup()),
            None => request,
        };

        let sent = request.await?;
        debug!(message_id = sent.id.0, "Message sent");
        Ok(())
    }

    /// Answer a callback query without showing a notification
    #[instrument(skip(self))]
    pub async fn answer_callback(&self, callback_id: &str) -> Result<(), TelegramError> {
        self.bot
            .answer_callback_query(callback_id.to_string())
            .await?;
        Ok(())
    }
}
