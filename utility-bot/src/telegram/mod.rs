//! Telegram layer: teloxide ↔ core adapters, dispatcher runner, transport error reporting.

mod adapters;
mod error_report;
mod runner;

pub use adapters::{TelegramCallbackQueryWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use error_report::report_error;
pub use runner::run_dispatcher;
