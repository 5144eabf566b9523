//! Internal domain models for track resolution.
//!
//! These types are OUR types - they don't change when the lookup service's
//! API changes. The wire response gets converted into them via the adapter.

/// A successfully resolved track: metadata plus a direct download link.
///
/// Produced only by the lookup adapter and immutable once created. Success
/// is carried by `Result<LookupResult, LookupError>`, not a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Track title
    pub title: String,
    /// Artist name, when the service reports one
    pub artist: Option<String>,
    /// Cover thumbnail URL, when the service reports one
    pub thumbnail_url: Option<String>,
    /// Direct link to the audio file
    pub download_link: String,
}

/// Fallback text when the service reports a failure without a message.
pub const GENERIC_UNAVAILABLE: &str = "This track can't be downloaded right now";

/// Errors that can occur while resolving a track.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The response body was not the expected JSON shape
    #[error("Unexpected response from the download service (HTTP {0})")]
    MalformedResponse(u16),

    /// The service answered with a failure status (or never answered)
    #[error("Download service error: {message}")]
    ServiceError {
        /// HTTP status of the failed response, absent for transport failures
        status: Option<u16>,
        message: String,
    },

    /// The service answered cleanly but could not resolve the track
    #[error("{0}")]
    NotResolvable(String),
}

const NOT_FOUND_MESSAGE: &str = "Song not found. Double-check that the link points to a track.";
const UNAVAILABLE_MESSAGE: &str =
    "The download service is temporarily unavailable. Try again in a moment.";

impl LookupError {
    /// Human-readable message for display.
    ///
    /// Remaps the two cases users hit most: a 404 becomes a bad-link message
    /// and a 5xx becomes a temporary-outage message. The HTTP status decides
    /// first when we have one (the body text may say anything); otherwise the
    /// error text itself is scanned. Everything else passes through unchanged.
    pub fn user_message(&self) -> String {
        if let Some(status) = self.http_status() {
            if status == 404 {
                return NOT_FOUND_MESSAGE.to_string();
            }
            if (500..600).contains(&status) {
                return UNAVAILABLE_MESSAGE.to_string();
            }
        }

        let text = self.to_string();
        let lower = text.to_lowercase();

        if lower.contains("404") || lower.contains("not found") {
            return NOT_FOUND_MESSAGE.to_string();
        }
        if mentions_server_error(&text) {
            return UNAVAILABLE_MESSAGE.to_string();
        }
        text
    }

    /// HTTP status of the failed exchange, when one was received.
    fn http_status(&self) -> Option<u16> {
        match self {
            LookupError::MalformedResponse(status) => Some(*status),
            LookupError::ServiceError { status, .. } => *status,
            LookupError::NotResolvable(_) => None,
        }
    }
}

/// True when `text` contains a standalone 5xx HTTP status code.
fn mentions_server_error(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.windows(3).enumerate().any(|(i, window)| {
        window[0] == b'5'
            && window[1].is_ascii_digit()
            && window[2].is_ascii_digit()
            && i.checked_sub(1)
                .is_none_or(|prev| !bytes[prev].is_ascii_digit())
            && bytes.get(i + 3).is_none_or(|next| !next.is_ascii_digit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_status_remaps_regardless_of_body_text() {
        let err = LookupError::ServiceError {
            status: Some(404),
            message: "upstream cache miss".to_string(),
        };
        assert!(err.user_message().contains("Song not found"));
    }

    #[test]
    fn test_5xx_status_remaps_regardless_of_body_text() {
        for status in [500, 502, 503] {
            let err = LookupError::ServiceError {
                status: Some(status),
                message: "overloaded".to_string(),
            };
            assert!(
                err.user_message().contains("temporarily unavailable"),
                "status {status} should remap"
            );
        }
    }

    #[test]
    fn test_statusless_404_text_still_remaps() {
        let err = LookupError::ServiceError {
            status: None,
            message: "HTTP 404: Not Found".to_string(),
        };
        assert!(err.user_message().contains("Song not found"));
    }

    #[test]
    fn test_not_found_text_remaps_regardless_of_status() {
        let err = LookupError::NotResolvable("track not found in catalog".to_string());
        assert!(err.user_message().contains("Song not found"));
    }

    #[test]
    fn test_other_failure_status_keeps_service_message() {
        let err = LookupError::ServiceError {
            status: Some(403),
            message: "forbidden in this region".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Download service error: forbidden in this region"
        );
    }

    #[test]
    fn test_malformed_response_on_5xx_also_remaps() {
        let err = LookupError::MalformedResponse(503);
        assert!(err.user_message().contains("temporarily unavailable"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = LookupError::NotResolvable("This track is region locked".to_string());
        assert_eq!(err.user_message(), "This track is region locked");
    }

    #[test]
    fn test_longer_numbers_are_not_status_codes() {
        assert!(!mentions_server_error("id 55021 rejected"));
        assert!(!mentions_server_error("took 1503ms"));
        assert!(mentions_server_error("upstream returned 502 twice"));
    }
}
