//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while CLI/main
//! uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`LinkError`], [`LookupError`], ...) for
//!   detailed handling
//! - All errors implement `std::error::Error` for compatibility

use crate::config::ConfigError;
use crate::history::StorageError;
use crate::link::LinkError;
use crate::lookup::LookupError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Submitted text is not a usable track link
    #[error("Invalid link: {0}")]
    Link(#[from] LinkError),

    /// Track resolution failed
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// History persistence error
    #[error("History storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(LinkError::NotATrackLink(
            "https://open.spotify.com/album/x".to_string(),
        ));
        assert!(err.to_string().contains("album/x"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::from(LookupError::MalformedResponse(500)).context("while resolving");
        assert!(err.to_string().contains("while resolving"));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<()> = Err(Error::from(LinkError::Empty));
        let with_ctx = result.with_context("additional context");
        assert!(
            with_ctx
                .unwrap_err()
                .to_string()
                .contains("additional context")
        );
    }
}
