//! Sum menu: adds up space-separated numbers. Bad input gets an error reply, never a crash.

use async_trait::async_trait;
use dbot_core::{Chat, Result};
use std::num::ParseFloatError;
use thiserror::Error;
use tracing::{info, warn};

use super::main_menu::back_keyboard;
use crate::menu::{ButtonHandler, ButtonPress, MenuContext, TextHandler};

const PROMPT: &str = "Enter numbers separated by spaces.\nFor example: 12.5 10 -50 3.14";

#[derive(Error, Debug)]
pub enum SumError {
    #[error("'{token}' is not a number ({source})")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Splits on single spaces and sums the tokens as `f64`. Empty tokens (double spaces) are errors.
pub fn parse_sum(text: &str) -> std::result::Result<f64, SumError> {
    text.split(' ').try_fold(0.0, |acc, token| {
        token
            .parse::<f64>()
            .map(|n| acc + n)
            .map_err(|source| SumError::InvalidNumber {
                token: token.to_string(),
                source,
            })
    })
}

pub struct SumMenu;

impl SumMenu {
    /// Reply for `text` sent in `chat_id`: the sum, or the parse error (logged at warn).
    pub fn reply(chat_id: i64, text: &str) -> String {
        match parse_sum(text) {
            Ok(sum) => {
                info!(chat_id = chat_id, sum = sum, "Sum computed");
                format!("Ok! Message received.\nText: {}\nSum: {}", text, sum)
            }
            Err(e) => {
                warn!(chat_id = chat_id, error = %e, "Sum input rejected");
                format!("Error: {}", e)
            }
        }
    }
}

#[async_trait]
impl ButtonHandler for SumMenu {
    async fn on_button_press(&self, ctx: &MenuContext, press: &ButtonPress) -> Result<()> {
        ctx.bot
            .edit_message(press.chat_id, press.message_id, PROMPT, Some(&back_keyboard()))
            .await
    }
}

#[async_trait]
impl TextHandler for SumMenu {
    async fn on_text(&self, ctx: &MenuContext, chat: &Chat, text: &str) -> Result<()> {
        ctx.bot.send_message(chat.id, &Self::reply(chat.id, text), None).await
    }
}
