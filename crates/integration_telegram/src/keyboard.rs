//! Reply keyboards
//!
//! Platform-neutral description of the buttons attached to a reply and
//! their conversion into Telegram markup.

use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    ReplyMarkup,
};

use crate::client::TelegramError;

/// Telegram's limit on inline button callback data, in bytes
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

/// An inline button that sends `data` back as a callback query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    label: String,
    data: String,
}

impl InlineButton {
    /// Create a callback button
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::CallbackDataTooLong` if `data` exceeds
    /// [`MAX_CALLBACK_DATA_LEN`] bytes.
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Result<Self, TelegramError> {
        let data = data.into();
        if data.len() > MAX_CALLBACK_DATA_LEN {
            return Err(TelegramError::CallbackDataTooLong { len: data.len() });
        }
        Ok(Self {
            label: label.into(),
            data,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Keyboard attached to an outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyKeyboard {
    /// Inline buttons under the message, one per row
    Inline(Vec<InlineButton>),
    /// A single reply-keyboard button asking for the user's location
    RequestLocation { label: String },
}

impl ReplyKeyboard {
    /// Convert into Telegram markup
    pub fn into_markup(self) -> ReplyMarkup {
        match self {
            Self::Inline(buttons) => {
                let rows = buttons
                    .into_iter()
                    .map(|b| vec![InlineKeyboardButton::callback(b.label, b.data)]);
                ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(rows))
            },
            Self::RequestLocation { label } => ReplyMarkup::Keyboard(
                KeyboardMarkup::new(vec![vec![
                    KeyboardButton::new(label).request(ButtonRequest::Location),
                ]])
                .resize_keyboard(),
            ),
        }
    }
}
