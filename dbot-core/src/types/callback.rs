//! Callback query: an inline button press.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// The message that carries the pressed keyboard; handlers edit it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub chat: Chat,
    pub message_id: i32,
}

/// A button press. `data` is the opaque button id; `message` may be missing when the
/// original message is too old or came from an inline query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub user: User,
    pub message: Option<MessageRef>,
    pub data: Option<String>,
}

impl CallbackQuery {
    /// Press of `button_id` on message `message_id` in `chat`.
    pub fn button(user: User, chat: Chat, message_id: i32, button_id: impl Into<String>) -> Self {
        Self {
            user,
            message: Some(MessageRef { chat, message_id }),
            data: Some(button_id.into()),
        }
    }
}
