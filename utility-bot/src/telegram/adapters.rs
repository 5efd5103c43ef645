//! Adapters from Telegram (teloxide) types to dbot_core types.

use dbot_core::{
    CallbackQuery, Chat, Message, MessageRef, ToCoreCallbackQuery, ToCoreMessage, ToCoreUser, User,
};

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

fn to_core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: chat_type(chat).to_string(),
    }
}

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0,
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_default(),
            chat: to_core_chat(&self.0.chat),
            text: self.0.text().map(|s| s.to_string()),
            created_at: self.0.date,
        }
    }
}

/// Wraps a teloxide CallbackQuery for conversion to core [`CallbackQuery`].
/// The keyboard's message may be inaccessible (too old); its chat and id are still known.
pub struct TelegramCallbackQueryWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreCallbackQuery for TelegramCallbackQueryWrapper<'a> {
    fn to_core(&self) -> CallbackQuery {
        CallbackQuery {
            user: TelegramUserWrapper(&self.0.from).to_core(),
            message: self.0.message.as_ref().map(|m| MessageRef {
                chat: to_core_chat(m.chat()),
                message_id: m.id().0,
            }),
            data: self.0.data.clone(),
        }
    }
}
