//! Lookup service HTTP client.
//!
//! One GET per resolution, no retries. Every failure path comes back as a
//! typed [`LookupError`]; nothing panics across this boundary and the client
//! never touches history (the caller records successes).

use super::{adapter, dto};
use crate::lookup::domain::{LookupError, LookupResult};

/// Default resolver endpoint. Overridable through the config file.
pub const DEFAULT_ENDPOINT: &str = "https://api.tunegrab.app/resolve";

/// User agent string sent with every lookup
const USER_AGENT: &str = concat!(
    "TuneGrab/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/tunegrab)"
);

/// Download resolver API client
pub struct LookupClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    /// Create a client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Resolve a canonical track URL into track metadata + a download link.
    ///
    /// Classification order matters and matches the service's behavior:
    /// an unparsable body wins over the HTTP status, the HTTP status wins
    /// over an incomplete-but-parsable body.
    pub async fn resolve(&self, canonical_url: &str) -> Result<LookupResult, LookupError> {
        let request_url = format!(
            "{}?url={}",
            self.base_url,
            urlencoding::encode(canonical_url)
        );

        tracing::debug!(url = %canonical_url, "Resolving track");

        let response = self
            .http_client
            .get(&request_url)
            .send()
            .await
            .map_err(|e| LookupError::ServiceError {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::ServiceError {
                status: None,
                message: e.to_string(),
            })?;

        let parsed: dto::ResolveResponse = serde_json::from_str(&body)
            .map_err(|_| LookupError::MalformedResponse(status.as_u16()))?;

        if !status.is_success() {
            // Keep the status alongside the body message so display
            // remapping can key on it
            return Err(LookupError::ServiceError {
                status: Some(status.as_u16()),
                message: parsed.message.unwrap_or_else(|| {
                    format!(
                        "HTTP {}: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown")
                    )
                }),
            });
        }

        adapter::to_result(parsed)
    }
}

impl Default for LookupClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    const TRACK: &str = "https://open.spotify.com/track/abc";

    /// Spin up a local server that answers exactly one request with the
    /// given status line and JSON body, and return a base URL pointing at it.
    fn one_shot_server(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/resolve")
    }

    #[test]
    fn test_default_client_uses_default_endpoint() {
        let client = LookupClient::default();
        assert_eq!(client.base_url, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("TuneGrab/"));
    }

    #[test]
    fn test_request_url_encodes_track_url() {
        let encoded = urlencoding::encode(TRACK);
        assert_eq!(encoded, "https%3A%2F%2Fopen.spotify.com%2Ftrack%2Fabc");
    }

    #[tokio::test]
    async fn test_resolve_success_returns_result() {
        let base = one_shot_server(
            "200 OK",
            r#"{"success":true,"title":"Windowlicker","channel":"Aphex Twin","DownloadLink":"https://cdn.example.com/abc.mp3"}"#,
        );

        let result = LookupClient::new(base).resolve(TRACK).await.unwrap();

        assert_eq!(result.title, "Windowlicker");
        assert_eq!(result.artist.as_deref(), Some("Aphex Twin"));
        assert_eq!(result.download_link, "https://cdn.example.com/abc.mp3");
    }

    #[tokio::test]
    async fn test_resolve_404_remaps_regardless_of_body_message() {
        let base = one_shot_server("404 Not Found", r#"{"message":"upstream cache miss"}"#);

        let err = LookupClient::new(base).resolve(TRACK).await.unwrap_err();

        assert_eq!(
            err,
            LookupError::ServiceError {
                status: Some(404),
                message: "upstream cache miss".to_string(),
            }
        );
        assert!(err.user_message().contains("Song not found"));
    }

    #[tokio::test]
    async fn test_resolve_503_remaps_regardless_of_body_message() {
        let base = one_shot_server("503 Service Unavailable", r#"{"message":"overloaded"}"#);

        let err = LookupClient::new(base).resolve(TRACK).await.unwrap_err();

        assert_eq!(
            err,
            LookupError::ServiceError {
                status: Some(503),
                message: "overloaded".to_string(),
            }
        );
        assert!(err.user_message().contains("temporarily unavailable"));
    }

    #[tokio::test]
    async fn test_resolve_unparsable_body_wins_over_status() {
        let base = one_shot_server("502 Bad Gateway", "gateway exploded");

        let err = LookupClient::new(base).resolve(TRACK).await.unwrap_err();

        assert_eq!(err, LookupError::MalformedResponse(502));
    }

    #[tokio::test]
    async fn test_resolve_failure_without_message_reports_status_text() {
        let base = one_shot_server("403 Forbidden", "{}");

        let err = LookupClient::new(base).resolve(TRACK).await.unwrap_err();

        assert_eq!(
            err,
            LookupError::ServiceError {
                status: Some(403),
                message: "HTTP 403: Forbidden".to_string(),
            }
        );
    }
}
