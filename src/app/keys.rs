//! Keyboard mapping from Zellij key events to application messages.
//!
//! The plugin pane has a single text box, so every printable key edits the
//! query. The text box reports its whole new contents through
//! [`Message::SetInput`], the same way a bound input field would.

use super::{AppState, Message};
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyIntent {
    /// Feed a message into the program loop.
    Dispatch(Message),
    /// Hide the plugin pane. Handled by the host, never reaches the reducer.
    Close,
}

/// Maps a key press to an intent, given the current state.
///
/// - printable characters (without Ctrl or Alt) append to the input
/// - `Backspace` removes the last character
/// - `Ctrl+u` clears the input
/// - `Enter` submits, even for blank input (the reducer reports the error)
/// - `Esc` closes the pane
///
/// Returns `None` for keys the plugin ignores.
#[must_use]
pub fn map_key(key: &KeyWithModifier, state: &AppState) -> Option<KeyIntent> {
    let ctrl = key.key_modifiers.contains(&KeyModifier::Ctrl);
    let alt = key.key_modifiers.contains(&KeyModifier::Alt);

    tracing::trace!(bare_key = ?key.bare_key, ctrl = ctrl, alt = alt, "key event");

    let message = match key.bare_key {
        BareKey::Esc => return Some(KeyIntent::Close),
        BareKey::Enter => Message::Search,
        BareKey::Char('u') if ctrl => Message::SetInput(String::new()),
        BareKey::Char(_) if ctrl || alt => return None,
        BareKey::Char(c) => {
            let mut input = state.input.clone();
            input.push(c);
            Message::SetInput(input)
        }
        BareKey::Backspace => {
            let mut input = state.input.clone();
            if input.pop().is_none() {
                return None;
            }
            Message::SetInput(input)
        }
        _ => return None,
    };

    Some(KeyIntent::Dispatch(message))
}
