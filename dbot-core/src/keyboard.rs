//! Inline keyboard: a grid of `(label, button_id)` buttons attached to an outbound message.
//!
//! Transport-agnostic; [`InlineKeyboard::to_telegram`] converts it to teloxide's markup.

use serde::{Deserialize, Serialize};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// A single button. `button_id` comes back as callback data when the button is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub label: String,
    pub button_id: String,
}

impl KeyboardButton {
    pub fn new(label: impl Into<String>, button_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            button_id: button_id.into(),
        }
    }
}

/// Rows of buttons, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<KeyboardButton>>,
}

impl InlineKeyboard {
    /// Creates an empty keyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyboard with one button.
    pub fn single(button: KeyboardButton) -> Self {
        Self::new().row(vec![button])
    }

    /// Appends a row.
    pub fn row(mut self, buttons: Vec<KeyboardButton>) -> Self {
        self.rows.push(buttons);
        self
    }

    /// Returns true if any button carries `button_id`.
    pub fn contains(&self, button_id: &str) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|b| b.button_id == button_id)
    }

    /// Converts to teloxide's inline markup (callback buttons only).
    pub fn to_telegram(&self) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(self.rows.iter().map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.button_id.clone()))
                .collect::<Vec<_>>()
        }))
    }
}
