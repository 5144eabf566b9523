//! Link submission and resolution handlers.
//!
//! Enforces the two ordering rules of the lookup flow: at most one lookup is
//! reflected in state at a time (submission is ignored while one is in
//! flight), and a completion only lands if it carries the current request
//! token - late responses from superseded submissions are dropped.

use iced::Task;

use crate::history::HistoryEntry;
use crate::link::TrackReference;
use crate::lookup::LookupClient;
use crate::ui::messages::Message;
use crate::ui::state::{AppState, ResolvedTrack};
use crate::ui::views;

/// Handle lookup-related messages
pub fn handle_lookup(s: &mut AppState, msg: Message) -> Task<Message> {
    match msg {
        Message::InputChanged(value) => {
            s.input = value;
            // Typing replaces whatever the clipboard offered
            s.suggestion = None;
        }

        Message::SubmitPressed => {
            if s.is_resolving {
                return Task::none();
            }

            // Validation failures short-circuit before any network call,
            // with a message that quotes what the user actually typed
            let reference = match TrackReference::parse(&s.input) {
                Ok(reference) => reference,
                Err(e) => {
                    s.toasts.warning(e.to_string());
                    return Task::none();
                }
            };

            tracing::info!(
                raw = %reference.raw_url,
                canonical = %reference.canonical_url,
                "Starting lookup"
            );

            s.is_resolving = true;
            s.request_seq += 1;
            s.pending = Some(reference.clone());

            let token = s.request_seq;
            let endpoint = s.config.lookup.endpoint.clone();
            let canonical = reference.canonical_url;

            return Task::perform(
                async move {
                    LookupClient::new(endpoint)
                        .resolve(&canonical)
                        .await
                        .map_err(|e| e.user_message())
                },
                move |result| Message::LookupFinished(token, result),
            );
        }

        Message::LookupFinished(token, result) => {
            if token != s.request_seq {
                tracing::debug!("Dropping stale lookup completion (token {token})");
                return Task::none();
            }

            s.is_resolving = false;
            let Some(reference) = s.pending.take() else {
                return Task::none();
            };

            match result {
                Ok(result) => {
                    // Canonical form keys the history, so the same track
                    // pasted with different tracking params stays one entry
                    s.history
                        .record(HistoryEntry::from_lookup(&result, &reference.canonical_url));
                    s.toasts.success(format!("Resolved \"{}\"", result.title));
                    s.current = Some(ResolvedTrack { reference, result });
                }
                Err(message) => {
                    s.toasts.error(message);
                }
            }
        }

        Message::OpenDownloadLink => {
            let link = s.current.as_ref().map(|c| c.result.download_link.clone());
            if let Some(link) = link {
                open_link(s, &link);
            }
        }

        Message::OpenCompanionDownload => {
            open_link(s, views::COMPANION_DOWNLOAD_URL);
        }

        _ => {}
    }
    Task::none()
}

fn open_link(s: &mut AppState, url: &str) {
    if let Err(e) = webbrowser::open(url) {
        tracing::error!("Failed to open {}: {}", url, e);
        s.toasts.error("Could not open the browser");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::history::{HistoryStore, MemoryStorage};
    use crate::lookup::LookupResult;

    fn test_state() -> AppState {
        AppState::new(
            Config::default(),
            HistoryStore::load(Box::new(MemoryStorage::new())),
        )
    }

    fn sample_result() -> LookupResult {
        LookupResult {
            title: "Windowlicker".to_string(),
            artist: Some("Aphex Twin".to_string()),
            thumbnail_url: None,
            download_link: "https://cdn.example.com/abc.mp3".to_string(),
        }
    }

    #[test]
    fn test_submit_starts_lookup() {
        let mut s = test_state();
        s.input = "https://open.spotify.com/track/abc?si=1".to_string();

        let _ = handle_lookup(&mut s, Message::SubmitPressed);

        assert!(s.is_resolving);
        assert_eq!(s.request_seq, 1);
        assert_eq!(
            s.pending.as_ref().unwrap().canonical_url,
            "https://open.spotify.com/track/abc"
        );
    }

    #[test]
    fn test_submit_invalid_input_short_circuits() {
        let mut s = test_state();
        s.input = "https://open.spotify.com/album/abc".to_string();

        let _ = handle_lookup(&mut s, Message::SubmitPressed);

        assert!(!s.is_resolving);
        assert_eq!(s.request_seq, 0);
        assert!(s.toasts.has_visible());
    }

    #[test]
    fn test_resubmission_while_resolving_is_ignored() {
        let mut s = test_state();
        s.input = "https://open.spotify.com/track/abc".to_string();

        let _ = handle_lookup(&mut s, Message::SubmitPressed);
        let _ = handle_lookup(&mut s, Message::SubmitPressed);

        // Still only one submission reflected in state
        assert_eq!(s.request_seq, 1);
    }

    #[test]
    fn test_success_records_history_and_goes_idle() {
        let mut s = test_state();
        s.input = "https://open.spotify.com/track/abc?si=1".to_string();
        let _ = handle_lookup(&mut s, Message::SubmitPressed);

        let _ = handle_lookup(&mut s, Message::LookupFinished(1, Ok(sample_result())));

        assert!(!s.is_resolving);
        assert!(s.pending.is_none());
        assert_eq!(s.current.as_ref().unwrap().result.title, "Windowlicker");
        assert_eq!(s.history.entries().len(), 1);
        assert_eq!(
            s.history.entries()[0].source_url,
            "https://open.spotify.com/track/abc"
        );
    }

    #[test]
    fn test_same_track_with_different_params_stays_one_entry() {
        let mut s = test_state();

        s.input = "https://open.spotify.com/track/abc?si=1".to_string();
        let _ = handle_lookup(&mut s, Message::SubmitPressed);
        let _ = handle_lookup(&mut s, Message::LookupFinished(1, Ok(sample_result())));

        s.input = "https://open.spotify.com/track/abc?si=2".to_string();
        let _ = handle_lookup(&mut s, Message::SubmitPressed);
        let _ = handle_lookup(&mut s, Message::LookupFinished(2, Ok(sample_result())));

        assert_eq!(s.history.entries().len(), 1);
        assert_eq!(
            s.history.entries()[0].source_url,
            "https://open.spotify.com/track/abc"
        );
    }

    #[test]
    fn test_failure_surfaces_toast_and_goes_idle() {
        let mut s = test_state();
        s.input = "https://open.spotify.com/track/abc".to_string();
        let _ = handle_lookup(&mut s, Message::SubmitPressed);

        let _ = handle_lookup(
            &mut s,
            Message::LookupFinished(1, Err("Song not found".to_string())),
        );

        assert!(!s.is_resolving);
        assert!(s.current.is_none());
        assert!(s.history.entries().is_empty());
        assert!(s.toasts.has_visible());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut s = test_state();
        s.input = "https://open.spotify.com/track/abc".to_string();
        let _ = handle_lookup(&mut s, Message::SubmitPressed);
        assert_eq!(s.request_seq, 1);

        // A completion from an older submission arrives late
        let _ = handle_lookup(&mut s, Message::LookupFinished(0, Ok(sample_result())));

        // The in-flight lookup is untouched and nothing was recorded
        assert!(s.is_resolving);
        assert!(s.pending.is_some());
        assert!(s.history.entries().is_empty());
    }

    #[test]
    fn test_typing_clears_suggestion() {
        let mut s = test_state();
        s.suggestion = Some("https://open.spotify.com/track/abc".to_string());

        let _ = handle_lookup(&mut s, Message::InputChanged("h".to_string()));

        assert!(s.suggestion.is_none());
        assert_eq!(s.input, "h");
    }
}
