//! Teloxide dispatcher: converts message and callback-query updates to core [`Update`]s and hands
//! them to [`MenuDispatcher`]. Stops when the dispatcher's shutdown token is cancelled.

use anyhow::Result;
use dbot_core::{DbotError, ToCoreCallbackQuery, ToCoreMessage, Update};
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use tracing::{debug, info, instrument, warn};

use super::adapters::{TelegramCallbackQueryWrapper, TelegramMessageWrapper};
use super::error_report::report_error;
use crate::dispatcher::MenuDispatcher;

type HandlerResult = std::result::Result<(), DbotError>;

async fn dispatch(dispatcher: Arc<MenuDispatcher>, update: Update) -> HandlerResult {
    if let Err(e) = dispatcher.handle_update(&update).await {
        report_error(&e, update.chat_id());
    }
    Ok(())
}

async fn on_message(msg: teloxide::types::Message, dispatcher: Arc<MenuDispatcher>) -> HandlerResult {
    let update = Update::Message(TelegramMessageWrapper(&msg).to_core());
    dispatch(dispatcher, update).await
}

async fn on_callback_query(
    query: teloxide::types::CallbackQuery,
    dispatcher: Arc<MenuDispatcher>,
) -> HandlerResult {
    let update = Update::CallbackQuery(TelegramCallbackQueryWrapper(&query).to_core());
    dispatch(dispatcher, update).await
}

/// Long-polls Telegram and routes updates until shutdown. Updates of one chat are handled in order;
/// different chats run concurrently.
#[instrument(skip(bot, dispatcher))]
pub async fn run_dispatcher(bot: teloxide::Bot, dispatcher: Arc<MenuDispatcher>) -> Result<()> {
    let shutdown = dispatcher.shutdown_token().clone();

    let handler = dptree::entry()
        .branch(teloxide::types::Update::filter_message().endpoint(on_message))
        .branch(teloxide::types::Update::filter_callback_query().endpoint(on_callback_query));

    let mut tg_dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![dispatcher])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update kind");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .build();

    let tg_shutdown = tg_dispatcher.shutdown_token();
    let shutdown_requested = shutdown.clone();
    tokio::spawn(async move {
        shutdown.cancelled().await;
        info!("Shutdown requested, stopping update listener");
        match tg_shutdown.shutdown() {
            Ok(done) => done.await,
            Err(e) => warn!(error = ?e, "Dispatcher was not running at shutdown"),
        }
    });

    if shutdown_requested.is_cancelled() {
        info!("Shutdown requested before polling started");
        return Ok(());
    }

    info!("Dispatcher started");
    tg_dispatcher.dispatch().await;
    info!("Dispatcher stopped");
    Ok(())
}
