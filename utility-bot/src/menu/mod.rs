//! Menu handler traits and the registry that maps menu ids to them.
//!
//! A menu always handles the button press that opens it; accepting free text is optional and
//! explicit in [`MenuEntry`].

mod registry;

pub use registry::MenuRegistry;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::session::SessionStore;

/// What a handler may touch: outbound bot, sessions, and the process-wide shutdown signal.
#[derive(Clone)]
pub struct MenuContext {
    pub bot: Arc<dyn Bot>,
    pub sessions: Arc<SessionStore>,
    pub shutdown: CancellationToken,
}

/// A button press routed to a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPress {
    pub chat_id: i64,
    /// Message carrying the keyboard; handlers edit it in place.
    pub message_id: i32,
    pub button_id: String,
}

/// Reacts to the button that opens a menu.
#[async_trait]
pub trait ButtonHandler: Send + Sync {
    async fn on_button_press(&self, ctx: &MenuContext, press: &ButtonPress) -> Result<()>;
}

/// Reacts to free text sent while the chat is inside the menu.
#[async_trait]
pub trait TextHandler: Send + Sync {
    async fn on_text(&self, ctx: &MenuContext, chat: &Chat, text: &str) -> Result<()>;
}

/// Registered capabilities of one menu.
#[derive(Clone)]
pub enum MenuEntry {
    /// Button press only; free text in this menu is ignored.
    ButtonOnly(Arc<dyn ButtonHandler>),
    /// Button press plus free-text handling.
    Interactive {
        button: Arc<dyn ButtonHandler>,
        text: Arc<dyn TextHandler>,
    },
}

impl MenuEntry {
    pub fn button_only(button: Arc<dyn ButtonHandler>) -> Self {
        MenuEntry::ButtonOnly(button)
    }

    pub fn interactive(button: Arc<dyn ButtonHandler>, text: Arc<dyn TextHandler>) -> Self {
        MenuEntry::Interactive { button, text }
    }

    /// Entry backed by one type that implements both capabilities.
    pub fn from_menu<M>(menu: Arc<M>) -> Self
    where
        M: ButtonHandler + TextHandler + 'static,
    {
        MenuEntry::Interactive {
            button: menu.clone(),
            text: menu,
        }
    }

    pub fn button(&self) -> &Arc<dyn ButtonHandler> {
        match self {
            MenuEntry::ButtonOnly(button) => button,
            MenuEntry::Interactive { button, .. } => button,
        }
    }

    pub fn text(&self) -> Option<&Arc<dyn TextHandler>> {
        match self {
            MenuEntry::ButtonOnly(_) => None,
            MenuEntry::Interactive { text, .. } => Some(text),
        }
    }
}
