//! # dbot-core
//!
//! Core types and traits for the menu bot: [`Bot`] (send / edit with an inline keyboard),
//! [`InlineKeyboard`], inbound [`Update`]s, errors, and tracing initialization.
//! Transport-agnostic apart from [`TelegramBot`]; used by utility-bot.

pub mod bot;
pub mod error;
pub mod keyboard;
pub mod logger;
pub mod types;

pub use bot::{Bot, TelegramBot};
pub use error::{DbotError, Result};
pub use keyboard::{InlineKeyboard, KeyboardButton};
pub use logger::init_tracing;
pub use types::{
    CallbackQuery, Chat, Message, MessageRef, ToCoreCallbackQuery, ToCoreMessage, ToCoreUser,
    Update, User,
};
