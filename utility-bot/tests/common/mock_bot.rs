//! Mock implementation of [`utility_bot::Bot`] for integration tests.
//!
//! Records every `send_message` / `edit_message` call so tests can assert on outbound traffic
//! without hitting Telegram. Can be told to fail edits to exercise error paths.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use utility_bot::{Bot, DbotError, InlineKeyboard, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    Send {
        chat_id: i64,
        text: String,
        keyboard: Option<InlineKeyboard>,
    },
    Edit {
        chat_id: i64,
        message_id: i32,
        text: String,
        keyboard: Option<InlineKeyboard>,
    },
}

impl Outbound {
    pub fn text(&self) -> &str {
        match self {
            Outbound::Send { text, .. } | Outbound::Edit { text, .. } => text,
        }
    }

    pub fn keyboard(&self) -> Option<&InlineKeyboard> {
        match self {
            Outbound::Send { keyboard, .. } | Outbound::Edit { keyboard, .. } => keyboard.as_ref(),
        }
    }
}

#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<Outbound>>,
    fail_edits: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `edit_message` return an error.
    pub fn fail_edits(&self) {
        self.fail_edits.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Outbound> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns and clears the recorded calls.
    pub fn take_calls(&self) -> Vec<Outbound> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(Outbound::Send {
            chat_id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }

    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i32,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()> {
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("message is not modified".to_string()));
        }
        self.calls.lock().unwrap().push(Outbound::Edit {
            chat_id,
            message_id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }
}
