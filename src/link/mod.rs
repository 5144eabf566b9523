//! Track link validation and canonicalization.
//!
//! A submitted link is only considered a track link when it points at the
//! streaming platform's web player and its path contains a `track` segment
//! followed by a non-empty identifier. Album, playlist and artist links fail
//! that rule and are rejected before any network call happens.
//!
//! The canonical form (`scheme://host/path`, no query, no fragment) is the
//! stable identity used both for history deduplication and as the value sent
//! to the lookup service.

use url::Url;

/// Hostnames accepted as the platform's web player.
const ACCEPTED_HOSTS: [&str; 2] = ["open.spotify.com", "play.spotify.com"];

/// Errors produced while checking a submitted link.
///
/// Messages reference the text the user actually typed, not the canonical
/// form derived from it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("Paste a track link first")]
    Empty,

    #[error("\"{0}\" is not a valid URL")]
    NotAUrl(String),

    #[error("\"{0}\" is not a track link - only single track links are supported")]
    NotATrackLink(String),
}

/// A validated track link: the text the user typed plus its canonical form.
///
/// Invariant: `canonical_url` is only ever derived from a `raw_url` that
/// passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackReference {
    pub raw_url: String,
    pub canonical_url: String,
}

impl TrackReference {
    /// Validate `raw` and build the canonical reference for it.
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LinkError::Empty);
        }

        let canonical = canonicalize(trimmed);
        let url = Url::parse(&canonical).map_err(|_| LinkError::NotAUrl(raw.to_string()))?;

        if !is_track_url(&url) {
            return Err(LinkError::NotATrackLink(raw.to_string()));
        }

        Ok(Self {
            raw_url: raw.to_string(),
            canonical_url: canonical,
        })
    }
}

/// Check whether `raw` is a single-track link on the platform.
pub fn validate(raw: &str) -> bool {
    TrackReference::parse(raw).is_ok()
}

/// Reduce a link to `scheme://host/path`, dropping query and fragment.
///
/// Unparsable input is returned unchanged, so callers must not rely on
/// canonicalization alone for validation - always validate first.
pub fn canonicalize(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}://{}{}", url.scheme(), host, url.path()),
            None => raw.to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

/// Accepted host + a `track` path segment followed by a non-empty identifier.
fn is_track_url(url: &Url) -> bool {
    if !matches!(url.host_str(), Some(host) if ACCEPTED_HOSTS.contains(&host)) {
        return false;
    }

    let Some(segments) = url.path_segments() else {
        return false;
    };

    let segments: Vec<&str> = segments.collect();
    segments
        .windows(2)
        .any(|pair| pair[0] == "track" && !pair[1].is_empty())
}
