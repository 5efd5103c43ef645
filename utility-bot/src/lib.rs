//! # Utility bot
//!
//! Menu-driven Telegram bot. Per-chat [`SessionStore`] remembers which menu a chat is in;
//! [`MenuRegistry`] maps menu ids to handlers; [`MenuDispatcher`] routes each update between them.
//! The `telegram` module adapts teloxide to the core types and runs the long-polling dispatcher.

pub mod cli;
pub mod components;
pub mod config;
pub mod dispatcher;
pub mod menu;
pub mod menus;
pub mod runner;
pub mod session;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_dispatcher, BotComponents};
pub use config::BotConfig;
pub use dispatcher::{MenuDispatcher, START_COMMAND};
pub use menu::{ButtonHandler, ButtonPress, MenuContext, MenuEntry, MenuRegistry, TextHandler};
pub use runner::run_bot;
pub use session::{Session, SessionState, SessionStore};

pub use dbot_core::{
    Bot, CallbackQuery, Chat, DbotError, InlineKeyboard, KeyboardButton, Message,
    MessageRef, Result, Update, User,
};
