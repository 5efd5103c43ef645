//! Transport conversion traits.

use super::{callback::CallbackQuery, message::Message, user::User};

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Converts a transport-specific button press to core [`CallbackQuery`].
pub trait ToCoreCallbackQuery: Send + Sync {
    fn to_core(&self) -> CallbackQuery;
}
