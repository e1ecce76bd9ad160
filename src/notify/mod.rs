//! Notifications Module
//!
//! Toast messages for reset confirmation and character selection.

mod toast;

pub use toast::{Toast, ToastKind, ToastQueue};

use crate::models::Character;

/// Message shown after the search is reset.
pub const RESET_MESSAGE: &str = "Search reset";

/// Message shown when a character card is clicked.
pub fn selection_message(character: &Character) -> String {
    format!("{} is {}", character.name, character.status)
}
