//! Length menu: replies with the character count of each message.

use async_trait::async_trait;
use dbot_core::{Chat, Result};
use tracing::info;

use super::main_menu::back_keyboard;
use crate::menu::{ButtonHandler, ButtonPress, MenuContext, TextHandler};

const PROMPT: &str = "Send me a message. I'll count its length.";

pub struct LengthMenu;

impl LengthMenu {
    /// Counts UTF-16 code units, the way Telegram measures text: "привет" is 6, "😀" is 2.
    pub fn count(text: &str) -> usize {
        text.encode_utf16().count()
    }

    pub fn reply(text: &str) -> String {
        format!(
            "Ok! Message received.\nText: {}\nCharacters: {}",
            text,
            Self::count(text)
        )
    }
}

#[async_trait]
impl ButtonHandler for LengthMenu {
    async fn on_button_press(&self, ctx: &MenuContext, press: &ButtonPress) -> Result<()> {
        ctx.bot
            .edit_message(press.chat_id, press.message_id, PROMPT, Some(&back_keyboard()))
            .await
    }
}

#[async_trait]
impl TextHandler for LengthMenu {
    async fn on_text(&self, ctx: &MenuContext, chat: &Chat, text: &str) -> Result<()> {
        info!(chat_id = chat.id, length = Self::count(text), "Length computed");
        ctx.bot.send_message(chat.id, &Self::reply(text), None).await
    }
}
