//! Message types for the TuneGrab UI.

use crate::lookup::LookupResult;

/// All possible messages that can be sent in the application
#[derive(Debug, Clone)]
pub enum Message {
    // Input and lookup
    InputChanged(String),
    SubmitPressed,
    /// A lookup finished. The token identifies which submission this answers;
    /// stale tokens are discarded. Errors arrive pre-remapped for display.
    LookupFinished(u64, Result<LookupResult, String>),
    OpenDownloadLink,
    OpenCompanionDownload,

    // History
    HistorySelected(usize),
    ClearHistoryPressed,

    // Clipboard suggestion
    WindowFocused,
    ClipboardRead(Option<String>),
    SuggestionAccepted,
    SuggestionDismissed,

    // Toast notifications
    ToastDismiss(u64),
    ToastExpireTick,
}
