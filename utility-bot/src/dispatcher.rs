//! Menu dispatcher: routes each inbound [`Update`] by the chat's session state.
//!
//! - `/start` → idle, main menu sent as a new message.
//! - Button press with a registered menu id → session enters that menu, its button handler runs.
//! - Free text while in a menu → that menu's text handler; free text while idle is dropped.

use dbot_core::{Bot, CallbackQuery, Message, Result, Update};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::menu::{ButtonPress, MenuContext, MenuRegistry};
use crate::menus::show_main_menu;
use crate::session::SessionStore;

/// Reserved command that always returns the chat to the main menu.
pub const START_COMMAND: &str = "/start";

pub struct MenuDispatcher {
    ctx: MenuContext,
    registry: Arc<MenuRegistry>,
}

impl MenuDispatcher {
    pub fn new(
        bot: Arc<dyn Bot>,
        sessions: Arc<SessionStore>,
        registry: Arc<MenuRegistry>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            ctx: MenuContext {
                bot,
                sessions,
                shutdown,
            },
            registry,
        }
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.ctx.sessions
    }

    pub fn registry(&self) -> &Arc<MenuRegistry> {
        &self.registry
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.ctx.shutdown
    }

    /// Handles one update. Abandons the handler (and its in-flight request) once shutdown is signalled.
    pub async fn handle_update(&self, update: &Update) -> Result<()> {
        let shutdown = self.ctx.shutdown.clone();
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                warn!(chat_id = ?update.chat_id(), "Shutdown in progress, update abandoned");
                Ok(())
            }
            result = self.route(update) => result,
        }
    }

    async fn route(&self, update: &Update) -> Result<()> {
        match update {
            Update::Message(message) => self.handle_message(message).await,
            Update::CallbackQuery(query) => self.handle_callback_query(query).await,
        }
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle_message(&self, message: &Message) -> Result<()> {
        let chat_id = message.chat.id;
        info!(
            chat_id = chat_id,
            user_id = message.user.id,
            from = %message.user.display_name(),
            text = ?message.text,
            "Message received"
        );

        let Some(text) = message.text.as_deref() else {
            debug!(chat_id = chat_id, "Non-text message ignored");
            return Ok(());
        };

        if text == START_COMMAND {
            return show_main_menu(&self.ctx, chat_id, None).await;
        }

        let session = self.ctx.sessions.get_or_create(chat_id);
        match session.operation_id().await {
            Some(menu_id) => {
                self.registry
                    .dispatch_text(&self.ctx, &menu_id, &message.chat, text)
                    .await?;
            }
            None => info!(chat_id = chat_id, "Text while idle ignored"),
        }
        Ok(())
    }

    #[instrument(skip(self, query), fields(user_id = query.user.id))]
    async fn handle_callback_query(&self, query: &CallbackQuery) -> Result<()> {
        let (Some(button_id), Some(message)) = (query.data.as_deref(), query.message.as_ref()) else {
            info!(user_id = query.user.id, "Callback query without data or message ignored");
            return Ok(());
        };

        if !self.registry.contains(button_id) {
            info!(chat_id = message.chat.id, button_id = %button_id, "Unregistered button pressed");
            return Ok(());
        }

        self.ctx
            .sessions
            .get_or_create(message.chat.id)
            .enter(button_id)
            .await;

        let press = ButtonPress {
            chat_id: message.chat.id,
            message_id: message.message_id,
            button_id: button_id.to_string(),
        };
        self.registry
            .dispatch_button_press(&self.ctx, button_id, &press)
            .await?;
        Ok(())
    }
}
