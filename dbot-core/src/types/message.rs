//! Inbound message type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A message received from a chat. `text` is `None` for stickers, photos and other non-text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub user: User,
    pub chat: Chat,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text message from `user` in `chat`, stamped now.
    pub fn new_text(id: i32, user: User, chat: Chat, text: impl Into<String>) -> Self {
        Self {
            id,
            user,
            chat,
            text: Some(text.into()),
            created_at: Utc::now(),
        }
    }
}
