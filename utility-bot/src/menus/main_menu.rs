//! Main menu: the operation picker shown on `/start` and on "back".

use async_trait::async_trait;
use dbot_core::{InlineKeyboard, KeyboardButton, Result};
use tracing::info;

use super::ids;
use crate::menu::{ButtonHandler, ButtonPress, MenuContext};

pub const MAIN_MENU_TEXT: &str = "Choose an operation:\n";

/// One row per operation.
pub fn main_keyboard() -> InlineKeyboard {
    InlineKeyboard::new()
        .row(vec![KeyboardButton::new("📝 Count message length", ids::GET_LENGTH)])
        .row(vec![KeyboardButton::new("💻 Sum numbers", ids::GET_SUM)])
}

/// Single "Back" button returning to the main menu.
pub fn back_keyboard() -> InlineKeyboard {
    InlineKeyboard::single(KeyboardButton::new("Back", ids::MAIN))
}

/// Resets the chat to idle and shows the main menu: edits `message_id` in place when given,
/// otherwise sends a new message.
pub async fn show_main_menu(ctx: &MenuContext, chat_id: i64, message_id: Option<i32>) -> Result<()> {
    ctx.sessions.get_or_create(chat_id).reset().await;
    let keyboard = main_keyboard();
    match message_id {
        Some(message_id) => {
            ctx.bot
                .edit_message(chat_id, message_id, MAIN_MENU_TEXT, Some(&keyboard))
                .await?
        }
        None => {
            ctx.bot
                .send_message(chat_id, MAIN_MENU_TEXT, Some(&keyboard))
                .await?
        }
    }
    info!(chat_id = chat_id, edited = message_id.is_some(), "Main menu shown");
    Ok(())
}

/// Button handler for "back": re-renders the main menu in the pressed message.
pub struct BackToMain;

#[async_trait]
impl ButtonHandler for BackToMain {
    async fn on_button_press(&self, ctx: &MenuContext, press: &ButtonPress) -> Result<()> {
        show_main_menu(ctx, press.chat_id, Some(press.message_id)).await
    }
}
