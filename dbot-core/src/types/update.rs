//! Inbound update: the two event kinds the menu dispatcher handles.

use serde::{Deserialize, Serialize};

use super::{callback::CallbackQuery, message::Message};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Update {
    Message(Message),
    CallbackQuery(CallbackQuery),
}

impl Update {
    /// Chat the update belongs to, if known.
    pub fn chat_id(&self) -> Option<i64> {
        match self {
            Update::Message(m) => Some(m.chat.id),
            Update::CallbackQuery(q) => q.message.as_ref().map(|m| m.chat.id),
        }
    }
}
