//! Per-chat session store: which menu each chat is currently in.
//!
//! One [`Session`] per chat id, created on first reference. Sessions are shared as `Arc`s so a
//! handler can hold one across awaits; concurrent writers are last-write-wins.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

/// Where a chat is in the menu flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Main menu / no active operation.
    #[default]
    Idle,
    /// Inside the menu with this id; free text goes to its text handler.
    InMenu(String),
}

/// Mutable record for one chat.
#[derive(Debug)]
pub struct Session {
    chat_id: i64,
    state: RwLock<SessionState>,
}

impl Session {
    fn new(chat_id: i64) -> Self {
        Self {
            chat_id,
            state: RwLock::new(SessionState::Idle),
        }
    }

    pub fn chat_id(&self) -> i64 {
        self.chat_id
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Active menu id, `None` when idle.
    pub async fn operation_id(&self) -> Option<String> {
        match &*self.state.read().await {
            SessionState::Idle => None,
            SessionState::InMenu(id) => Some(id.clone()),
        }
    }

    /// Enters the menu `menu_id`, replacing any previous one.
    pub async fn enter(&self, menu_id: &str) {
        *self.state.write().await = SessionState::InMenu(menu_id.to_string());
    }

    /// Back to idle.
    pub async fn reset(&self) {
        *self.state.write().await = SessionState::Idle;
    }
}

struct SessionSlot {
    session: Arc<Session>,
    last_seen: Instant,
}

/// Concurrent map of chat id to [`Session`].
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<i64, SessionSlot>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `chat_id`, creating an idle one atomically if none exists.
    pub fn get_or_create(&self, chat_id: i64) -> Arc<Session> {
        let mut slot = self.sessions.entry(chat_id).or_insert_with(|| {
            debug!(chat_id = chat_id, "Session created");
            SessionSlot {
                session: Arc::new(Session::new(chat_id)),
                last_seen: Instant::now(),
            }
        });
        slot.last_seen = Instant::now();
        slot.session.clone()
    }

    /// Returns the session for `chat_id` without creating one.
    pub fn get(&self, chat_id: i64) -> Option<Arc<Session>> {
        self.sessions.get(&chat_id).map(|slot| slot.session.clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drops sessions not referenced through [`get_or_create`](Self::get_or_create) for at least
    /// `max_idle`. Returns how many were removed.
    pub fn prune_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, slot| slot.last_seen.elapsed() < max_idle);
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            info!(removed = removed, remaining = self.sessions.len(), "Pruned idle sessions");
        }
        removed
    }
}
