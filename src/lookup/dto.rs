//! Lookup service Data Transfer Objects.
//!
//! The download resolver is an unversioned JSON-over-GET endpoint. Field
//! names are matched case-sensitively: the service reports the artist as
//! `channel` and the payload link as `DownloadLink` (sic).

use serde::{Deserialize, Serialize};

/// Response body of `GET <base>?url=<track url>`.
///
/// Success and failure share one shape; on failure only `message` (and
/// sometimes nothing at all) is populated.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolveResponse {
    /// Whether the service resolved the track
    pub success: bool,
    /// Track title
    pub title: Option<String>,
    /// Artist name (the service's field name, not ours)
    pub channel: Option<String>,
    /// Cover thumbnail URL
    pub thumbnail: Option<String>,
    /// Direct link to the audio file
    #[serde(rename = "DownloadLink")]
    pub download_link: Option<String>,
    /// Human-readable failure reason
    pub message: Option<String>,
}
