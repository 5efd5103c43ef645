//! Main entry: init logging, validate config, build components, wire Ctrl-C and the idle sweep,
//! then run the Telegram dispatcher until shutdown.

use anyhow::Result;
use dbot_core::init_tracing;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::session::SessionStore;
use crate::telegram::run_dispatcher;

/// Prunes sessions idle for `ttl`, checking every `ttl / 2` (at least 1 s), until `shutdown`.
pub fn spawn_session_sweeper(
    sessions: Arc<SessionStore>,
    ttl: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    let period = (ttl / 2).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    sessions.prune_idle(ttl);
                }
            }
        }
        info!("Session sweeper stopped");
    })
}

fn spawn_ctrl_c_handler(shutdown: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, shutting down");
                shutdown.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });
}

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(Path::new(&config.log_file)))?;

    info!(
        log_file = %config.log_file,
        custom_api_url = config.telegram_api_url.is_some(),
        session_idle_ttl_secs = ?config.session_idle_ttl_secs,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    spawn_ctrl_c_handler(components.shutdown.clone());

    let sweeper = config.session_idle_ttl().map(|ttl| {
        spawn_session_sweeper(components.sessions.clone(), ttl, components.shutdown.clone())
    });

    info!("Bot started successfully");
    run_dispatcher(components.teloxide_bot, components.dispatcher).await?;

    components.shutdown.cancel();
    if let Some(sweeper) = sweeper {
        if let Err(e) = sweeper.await {
            error!(error = %e, "Session sweeper task failed");
        }
    }
    info!("Bot stopped");
    Ok(())
}
