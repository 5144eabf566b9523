//! Clipboard suggestion handlers.
//!
//! `WindowFocused` fires on startup and on every focus gain; each one
//! triggers a single clipboard read. A host that denies clipboard access
//! delivers `None`, which falls through silently.

use iced::Task;

use crate::clipboard;
use crate::ui::messages::Message;
use crate::ui::state::AppState;

/// Handle clipboard-related messages
pub fn handle_clipboard(s: &mut AppState, msg: Message) -> Task<Message> {
    match msg {
        Message::WindowFocused => {
            return iced::clipboard::read().map(Message::ClipboardRead);
        }
        Message::ClipboardRead(contents) => {
            // Only ever offer - never auto-fill the input
            if let Some(candidate) = clipboard::suggest(contents, s.input.is_empty()) {
                s.suggestion = Some(candidate);
            }
        }
        Message::SuggestionAccepted => {
            if let Some(candidate) = s.suggestion.take() {
                s.input = candidate;
            }
        }
        Message::SuggestionDismissed => {
            s.suggestion = None;
        }
        _ => {}
    }
    Task::none()
}
