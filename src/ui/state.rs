//! Application state types for the TuneGrab UI.

use crate::config::Config;
use crate::history::HistoryStore;
use crate::link::TrackReference;
use crate::lookup::LookupResult;
use crate::ui::views::ToastQueue;

/// Top-level application state.
///
/// There is no loading phase: config and history load synchronously at
/// startup and both degrade to defaults rather than fail.
pub struct AppState {
    pub config: Config,

    // Lookup state
    pub input: String,
    /// A lookup is in flight; submission is disabled while set
    pub is_resolving: bool,
    /// Monotonically increasing token for in-flight lookups. Completions
    /// carrying an older token are stale and get dropped.
    pub request_seq: u64,
    /// The reference being resolved (kept for history recording)
    pub pending: Option<TrackReference>,
    /// Last successful resolution, shown as the result card
    pub current: Option<ResolvedTrack>,

    // Clipboard suggestion (one-shot, accepted explicitly)
    pub suggestion: Option<String>,

    // History
    pub history: HistoryStore,

    // Notifications
    pub toasts: ToastQueue,
}

/// A resolved track together with the link that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedTrack {
    pub reference: TrackReference,
    pub result: LookupResult,
}

impl AppState {
    pub fn new(config: Config, history: HistoryStore) -> Self {
        Self {
            config,
            input: String::new(),
            is_resolving: false,
            request_seq: 0,
            pending: None,
            current: None,
            suggestion: None,
            history,
            toasts: ToastQueue::default(),
        }
    }
}
