//! Component factory: builds the teloxide bot, session store, menu registry and dispatcher from config.

use anyhow::Result;
use dbot_core::{Bot as CoreBot, TelegramBot};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::dispatcher::MenuDispatcher;
use crate::menu::MenuRegistry;
use crate::menus::register_default_menus;
use crate::session::SessionStore;

/// Everything `run_bot` needs; also handy for tests that drive the dispatcher directly.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub sessions: Arc<SessionStore>,
    pub registry: Arc<MenuRegistry>,
    pub dispatcher: Arc<MenuDispatcher>,
    pub shutdown: CancellationToken,
}

/// Creates the teloxide bot, honouring `telegram_api_url` when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))?;
            info!(url = %url_str, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Builds the dispatcher over `bot` with the default menus registered.
pub fn build_dispatcher(bot: Arc<dyn CoreBot>, shutdown: CancellationToken) -> MenuDispatcher {
    let registry = Arc::new(MenuRegistry::new());
    register_default_menus(&registry);
    MenuDispatcher::new(bot, Arc::new(SessionStore::new()), registry, shutdown)
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config)?;
    let shutdown = CancellationToken::new();
    let core_bot: Arc<dyn CoreBot> = Arc::new(TelegramBot::from_teloxide(teloxide_bot.clone()));
    let dispatcher = Arc::new(build_dispatcher(core_bot, shutdown.clone()));

    info!(menus = dispatcher.registry().len(), "Bot components built");

    Ok(BotComponents {
        teloxide_bot,
        sessions: dispatcher.sessions().clone(),
        registry: dispatcher.registry().clone(),
        dispatcher,
        shutdown,
    })
}
