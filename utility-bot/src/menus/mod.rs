//! The bot's menus: main menu (also the "back" target), text length, and sum of numbers.

mod length;
mod main_menu;
mod sum;

pub use length::LengthMenu;
pub use main_menu::{back_keyboard, main_keyboard, show_main_menu, BackToMain, MAIN_MENU_TEXT};
pub use sum::{parse_sum, SumError, SumMenu};

use std::sync::Arc;

use crate::menu::{MenuEntry, MenuRegistry};

/// Menu ids; also the callback data of the buttons that open them.
pub mod ids {
    pub const MAIN: &str = "Main";
    pub const GET_LENGTH: &str = "GetLength";
    pub const GET_SUM: &str = "GetSum";
}

/// Registers the main menu, the length menu and the sum menu.
pub fn register_default_menus(registry: &MenuRegistry) {
    registry.register(ids::GET_LENGTH, MenuEntry::from_menu(Arc::new(LengthMenu)));
    registry.register(ids::GET_SUM, MenuEntry::from_menu(Arc::new(SumMenu)));
    registry.register(ids::MAIN, MenuEntry::button_only(Arc::new(BackToMain)));
}
