//! Core types: user, chat, inbound message, callback query, update, and transport conversion traits.
//!
//! One file per main type, matching the rest of the workspace.

mod callback;
mod chat;
mod convert;
mod message;
mod update;
mod user;

pub use callback::{CallbackQuery, MessageRef};
pub use chat::Chat;
pub use convert::{ToCoreCallbackQuery, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use update::Update;
pub use user::User;
