//! History selection and clearing handlers.

use iced::Task;

use crate::ui::messages::Message;
use crate::ui::state::AppState;

/// Handle history-related messages
pub fn handle_history(s: &mut AppState, msg: Message) -> Task<Message> {
    match msg {
        Message::HistorySelected(index) => {
            if let Some(entry) = s.history.entries().get(index) {
                // Re-fill the input with the entry's canonical link
                s.input = entry.source_url.clone();
                s.suggestion = None;
            }
        }
        Message::ClearHistoryPressed => {
            s.history.clear();
            s.toasts.info("History cleared");
        }
        _ => {}
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::history::{HistoryEntry, HistoryStore, MemoryStorage};
    use crate::lookup::LookupResult;

    fn state_with_one_entry() -> AppState {
        let mut history = HistoryStore::load(Box::new(MemoryStorage::new()));
        let result = LookupResult {
            title: "Windowlicker".to_string(),
            artist: Some("Aphex Twin".to_string()),
            thumbnail_url: None,
            download_link: "https://cdn.example.com/abc.mp3".to_string(),
        };
        history.record(HistoryEntry::from_lookup(
            &result,
            "https://open.spotify.com/track/abc",
        ));
        AppState::new(Config::default(), history)
    }

    #[test]
    fn test_selecting_entry_refills_input() {
        let mut s = state_with_one_entry();

        let _ = handle_history(&mut s, Message::HistorySelected(0));

        assert_eq!(s.input, "https://open.spotify.com/track/abc");
    }

    #[test]
    fn test_selecting_out_of_range_is_a_no_op() {
        let mut s = state_with_one_entry();

        let _ = handle_history(&mut s, Message::HistorySelected(7));

        assert!(s.input.is_empty());
    }

    #[test]
    fn test_clear_empties_history() {
        let mut s = state_with_one_entry();

        let _ = handle_history(&mut s, Message::ClearHistoryPressed);

        assert!(s.history.entries().is_empty());
        assert!(s.toasts.has_visible());
    }
}
