//! Update handlers for application messages.
//!
//! This module is split into submodules by concern:
//! - `lookup`: link submission, resolution and download-link opening
//! - `history`: history row selection and clearing
//! - `clipboard`: focus-gain clipboard checks and suggestion handling

mod clipboard;
mod history;
mod lookup;

// Re-export all handler functions
pub use clipboard::handle_clipboard;
pub use history::handle_history;
pub use lookup::handle_lookup;
