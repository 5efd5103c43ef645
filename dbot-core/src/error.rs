//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for outbound bot operations.
#[derive(Error, Debug)]
pub enum DbotError {
    /// Transport failure outside teloxide (other transports, test doubles).
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
