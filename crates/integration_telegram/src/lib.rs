//! Telegram Bot API integration
//!
//! Thin client over `teloxide` for the two outbound calls the bot makes:
//! sending a text reply (optionally with a keyboard) and answering a
//! callback query.

pub mod client;
mod keyboard;

pub use client::{TelegramClient, TelegramError};
pub use keyboard::{InlineButton, MAX_CALLBACK_DATA_LEN, ReplyKeyboard};
