//! Opportunistic clipboard suggestions.
//!
//! On startup and on every focus gain, the shell reads the system clipboard
//! and runs it through [`suggest`]. A candidate only becomes a suggestion
//! when the input field is still empty and the text validates as a track
//! link; the suggestion is rendered as a banner and never auto-fills the
//! input - accepting it is an explicit user action.
//!
//! A host that denies clipboard access hands us `None`, which is ignored
//! silently. There is no user-facing error for an unreadable clipboard.

use crate::link;

/// Decide whether clipboard contents should be offered as a suggestion.
pub fn suggest(candidate: Option<String>, input_is_empty: bool) -> Option<String> {
    if !input_is_empty {
        return None;
    }

    let text = candidate?;
    let trimmed = text.trim();
    if trimmed.is_empty() || !link::validate(trimmed) {
        tracing::debug!("Ignoring clipboard contents (not a track link)");
        return None;
    }

    Some(trimmed.to_string())
}
