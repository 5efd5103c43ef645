//! Menu registry: menu id → [`MenuEntry`]. Last registration for an id wins.

use dashmap::DashMap;
use dbot_core::{Chat, Result};
use tracing::{debug, info, instrument};

use super::{ButtonPress, MenuContext, MenuEntry};

#[derive(Default)]
pub struct MenuRegistry {
    entries: DashMap<String, MenuEntry>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `menu_id`.
    pub fn register(&self, menu_id: impl Into<String>, entry: MenuEntry) {
        let menu_id = menu_id.into();
        let accepts_text = entry.text().is_some();
        if self.entries.insert(menu_id.clone(), entry).is_some() {
            info!(menu_id = %menu_id, accepts_text = accepts_text, "Menu re-registered, previous entry replaced");
        } else {
            debug!(menu_id = %menu_id, accepts_text = accepts_text, "Menu registered");
        }
    }

    pub fn contains(&self, menu_id: &str) -> bool {
        self.entries.contains_key(menu_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, menu_id: &str) -> Option<MenuEntry> {
        // Clone out so no shard lock is held across the handler's awaits.
        self.entries.get(menu_id).map(|e| e.value().clone())
    }

    /// Runs the button handler of `menu_id`. Returns `Ok(false)` if no such menu is registered.
    #[instrument(skip(self, ctx, press), fields(chat_id = press.chat_id))]
    pub async fn dispatch_button_press(
        &self,
        ctx: &MenuContext,
        menu_id: &str,
        press: &ButtonPress,
    ) -> Result<bool> {
        let Some(entry) = self.entry(menu_id) else {
            info!(chat_id = press.chat_id, button_id = %press.button_id, "Unregistered button pressed");
            return Ok(false);
        };
        info!(chat_id = press.chat_id, button_id = %press.button_id, "Button pressed");
        entry.button().on_button_press(ctx, press).await?;
        Ok(true)
    }

    /// Runs the text handler of `menu_id`. Returns `Ok(false)` if the menu is unknown or takes no text.
    #[instrument(skip(self, ctx, chat, text), fields(chat_id = chat.id))]
    pub async fn dispatch_text(
        &self,
        ctx: &MenuContext,
        menu_id: &str,
        chat: &Chat,
        text: &str,
    ) -> Result<bool> {
        let Some(entry) = self.entry(menu_id) else {
            info!(chat_id = chat.id, menu_id = %menu_id, "Text for unregistered menu dropped");
            return Ok(false);
        };
        let Some(handler) = entry.text() else {
            info!(chat_id = chat.id, menu_id = %menu_id, "Menu takes no text, message dropped");
            return Ok(false);
        };
        handler.on_text(ctx, chat, text).await?;
        Ok(true)
    }
}
