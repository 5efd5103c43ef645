//! Integration tests for MenuDispatcher: session transitions, menu routing, and the two built-in menus.
//!
//! Drives the dispatcher with core updates and a recording MockBot; no network.

mod common;

use std::sync::Arc;

use common::mock_bot::{MockBot, Outbound};
use tokio_util::sync::CancellationToken;
use utility_bot::menus::{back_keyboard, ids, main_keyboard, MAIN_MENU_TEXT};
use utility_bot::{
    build_dispatcher, CallbackQuery, Chat, Message, MenuDispatcher, SessionState, Update, User,
};

const CHAT: i64 = 4242;
const KEYBOARD_MESSAGE: i32 = 77;

fn setup() -> (Arc<MockBot>, MenuDispatcher) {
    let bot = Arc::new(MockBot::new());
    let dispatcher = build_dispatcher(bot.clone(), CancellationToken::new());
    (bot, dispatcher)
}

fn user() -> User {
    User {
        id: 1001,
        username: Some("tester".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

fn text(content: &str) -> Update {
    Update::Message(Message::new_text(1, user(), Chat::private(CHAT), content))
}

fn press(button_id: &str) -> Update {
    Update::CallbackQuery(CallbackQuery::button(
        user(),
        Chat::private(CHAT),
        KEYBOARD_MESSAGE,
        button_id,
    ))
}

async fn state(dispatcher: &MenuDispatcher) -> SessionState {
    dispatcher.sessions().get_or_create(CHAT).state().await
}

#[tokio::test]
async fn test_start_sends_main_menu_and_resets_state() {
    let (bot, dispatcher) = setup();
    dispatcher.sessions().get_or_create(CHAT).enter(ids::GET_SUM).await;

    dispatcher.handle_update(&text("/start")).await.unwrap();

    assert_eq!(state(&dispatcher).await, SessionState::Idle);
    let calls = bot.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], Outbound::Send { chat_id: CHAT, .. }));
    assert_eq!(calls[0].text(), MAIN_MENU_TEXT);
    assert_eq!(calls[0].keyboard(), Some(&main_keyboard()));
}

#[tokio::test]
async fn test_text_while_idle_is_ignored() {
    let (bot, dispatcher) = setup();

    dispatcher.handle_update(&text("1 2 3")).await.unwrap();

    assert!(bot.calls().is_empty());
    assert_eq!(state(&dispatcher).await, SessionState::Idle);
}

#[tokio::test]
async fn test_non_text_message_is_ignored() {
    let (bot, dispatcher) = setup();
    let mut message = Message::new_text(1, user(), Chat::private(CHAT), "");
    message.text = None;

    dispatcher.handle_update(&Update::Message(message)).await.unwrap();

    assert!(bot.calls().is_empty());
}

#[tokio::test]
async fn test_menu_button_enters_menu_and_edits_prompt() {
    let (bot, dispatcher) = setup();

    dispatcher.handle_update(&press(ids::GET_LENGTH)).await.unwrap();

    assert_eq!(state(&dispatcher).await, SessionState::InMenu(ids::GET_LENGTH.to_string()));
    let calls = bot.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Outbound::Edit {
            chat_id,
            message_id,
            keyboard,
            ..
        } => {
            assert_eq!(*chat_id, CHAT);
            assert_eq!(*message_id, KEYBOARD_MESSAGE);
            assert_eq!(keyboard.as_ref(), Some(&back_keyboard()));
        }
        other => panic!("expected an edit, got {:?}", other),
    }
}

#[tokio::test]
async fn test_length_menu_replies_with_count() {
    let (bot, dispatcher) = setup();
    dispatcher.handle_update(&press(ids::GET_LENGTH)).await.unwrap();
    bot.take_calls();

    dispatcher.handle_update(&text("hello")).await.unwrap();

    let calls = bot.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], Outbound::Send { chat_id: CHAT, keyboard: None, .. }));
    assert!(calls[0].text().contains("Characters: 5"));
    assert_eq!(state(&dispatcher).await, SessionState::InMenu(ids::GET_LENGTH.to_string()));
}

#[tokio::test]
async fn test_sum_menu_replies_with_sum_repeatedly() {
    let (bot, dispatcher) = setup();
    dispatcher.handle_update(&press(ids::GET_SUM)).await.unwrap();
    bot.take_calls();

    dispatcher.handle_update(&text("1 2 3")).await.unwrap();
    dispatcher.handle_update(&text("1.5 -2")).await.unwrap();

    let calls = bot.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].text().contains("Sum: 6"));
    assert!(calls[1].text().contains("-0.5"));
    assert_eq!(state(&dispatcher).await, SessionState::InMenu(ids::GET_SUM.to_string()));
}

#[tokio::test]
async fn test_sum_menu_bad_number_gets_error_reply() {
    let (bot, dispatcher) = setup();
    dispatcher.handle_update(&press(ids::GET_SUM)).await.unwrap();
    bot.take_calls();

    dispatcher.handle_update(&text("1 foo")).await.unwrap();

    let calls = bot.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].text().starts_with("Error: "));
    assert!(calls[0].text().contains("foo"));
    assert!(!calls[0].text().contains("Sum:"));
}

#[tokio::test]
async fn test_back_button_returns_to_idle_with_edit() {
    let (bot, dispatcher) = setup();
    dispatcher.handle_update(&press(ids::GET_SUM)).await.unwrap();
    bot.take_calls();

    dispatcher.handle_update(&press(ids::MAIN)).await.unwrap();

    assert_eq!(state(&dispatcher).await, SessionState::Idle);
    let calls = bot.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(
        calls[0],
        Outbound::Edit { chat_id: CHAT, message_id: KEYBOARD_MESSAGE, .. }
    ));
    assert_eq!(calls[0].text(), MAIN_MENU_TEXT);

    dispatcher.handle_update(&text("1 2 3")).await.unwrap();
    assert_eq!(bot.calls().len(), 1);
}

#[tokio::test]
async fn test_unregistered_button_is_dropped() {
    let (bot, dispatcher) = setup();
    dispatcher.sessions().get_or_create(CHAT).enter(ids::GET_LENGTH).await;

    dispatcher.handle_update(&press("GetProduct")).await.unwrap();

    assert!(bot.calls().is_empty());
    assert_eq!(state(&dispatcher).await, SessionState::InMenu(ids::GET_LENGTH.to_string()));
}

#[tokio::test]
async fn test_callback_without_data_or_message_is_dropped() {
    let (bot, dispatcher) = setup();
    let no_message = CallbackQuery {
        user: user(),
        message: None,
        data: Some(ids::GET_SUM.to_string()),
    };
    let no_data = CallbackQuery {
        data: None,
        ..CallbackQuery::button(user(), Chat::private(CHAT), KEYBOARD_MESSAGE, ids::GET_SUM)
    };

    dispatcher.handle_update(&Update::CallbackQuery(no_message)).await.unwrap();
    dispatcher.handle_update(&Update::CallbackQuery(no_data)).await.unwrap();

    assert!(bot.calls().is_empty());
    assert!(dispatcher.sessions().get(CHAT).is_none());
}

#[tokio::test]
async fn test_text_for_stale_operation_is_dropped() {
    let (bot, dispatcher) = setup();
    dispatcher.sessions().get_or_create(CHAT).enter("Removed").await;

    dispatcher.handle_update(&text("hello")).await.unwrap();

    assert!(bot.calls().is_empty());
}

#[tokio::test]
async fn test_button_handler_error_is_returned_not_panicked() {
    let (bot, dispatcher) = setup();
    bot.fail_edits();

    let result = dispatcher.handle_update(&press(ids::GET_SUM)).await;

    assert!(result.is_err());
    assert_eq!(state(&dispatcher).await, SessionState::InMenu(ids::GET_SUM.to_string()));
}

#[tokio::test]
async fn test_chats_are_independent() {
    let (bot, dispatcher) = setup();
    let other_chat = Update::Message(Message::new_text(2, user(), Chat::private(CHAT + 1), "hello"));

    dispatcher.handle_update(&press(ids::GET_LENGTH)).await.unwrap();
    bot.take_calls();
    dispatcher.handle_update(&other_chat).await.unwrap();

    assert!(bot.calls().is_empty());
    assert_eq!(
        dispatcher.sessions().get_or_create(CHAT + 1).state().await,
        SessionState::Idle
    );
}

#[tokio::test]
async fn test_cancelled_dispatcher_abandons_updates() {
    let bot = Arc::new(MockBot::new());
    let shutdown = CancellationToken::new();
    let dispatcher = build_dispatcher(bot.clone(), shutdown.clone());
    shutdown.cancel();

    dispatcher.handle_update(&text("/start")).await.unwrap();

    assert!(bot.calls().is_empty());
}
