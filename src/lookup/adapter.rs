//! Converts lookup service DTOs into domain models.

use super::domain::{GENERIC_UNAVAILABLE, LookupError, LookupResult};
use super::dto::ResolveResponse;

/// Turn a parsed response body into a [`LookupResult`].
///
/// A body only counts as success when `success` is true AND both `title` and
/// `DownloadLink` are present; anything less is [`LookupError::NotResolvable`]
/// carrying the service's message when it sent one.
pub fn to_result(response: ResolveResponse) -> Result<LookupResult, LookupError> {
    let not_resolvable = |message: Option<String>| {
        LookupError::NotResolvable(message.unwrap_or_else(|| GENERIC_UNAVAILABLE.to_string()))
    };

    if !response.success {
        return Err(not_resolvable(response.message));
    }

    match (response.title, response.download_link) {
        (Some(title), Some(download_link)) => Ok(LookupResult {
            title,
            artist: response.channel,
            thumbnail_url: response.thumbnail,
            download_link,
        }),
        _ => Err(not_resolvable(response.message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> ResolveResponse {
        ResolveResponse {
            success: true,
            title: Some("Windowlicker".to_string()),
            channel: Some("Aphex Twin".to_string()),
            thumbnail: Some("https://i.scdn.co/image/abc".to_string()),
            download_link: Some("https://cdn.example.com/abc.mp3".to_string()),
            message: None,
        }
    }

    #[test]
    fn test_full_response_converts() {
        let result = to_result(full_response()).unwrap();
        assert_eq!(result.title, "Windowlicker");
        assert_eq!(result.artist.as_deref(), Some("Aphex Twin"));
        assert_eq!(result.download_link, "https://cdn.example.com/abc.mp3");
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let response = ResolveResponse {
            channel: None,
            thumbnail: None,
            ..full_response()
        };
        let result = to_result(response).unwrap();
        assert!(result.artist.is_none());
        assert!(result.thumbnail_url.is_none());
    }

    #[test]
    fn test_success_without_download_link_is_not_resolvable() {
        let response = ResolveResponse {
            download_link: None,
            ..full_response()
        };
        assert_eq!(
            to_result(response).unwrap_err(),
            LookupError::NotResolvable(GENERIC_UNAVAILABLE.to_string())
        );
    }

    #[test]
    fn test_success_without_title_is_not_resolvable() {
        let response = ResolveResponse {
            title: None,
            ..full_response()
        };
        assert!(matches!(
            to_result(response),
            Err(LookupError::NotResolvable(_))
        ));
    }

    #[test]
    fn test_failure_keeps_service_message() {
        let response = ResolveResponse {
            success: false,
            message: Some("Track is region locked".to_string()),
            ..ResolveResponse::default()
        };
        assert_eq!(
            to_result(response).unwrap_err(),
            LookupError::NotResolvable("Track is region locked".to_string())
        );
    }

    #[test]
    fn test_failure_without_message_uses_generic_text() {
        let response = ResolveResponse::default();
        assert_eq!(
            to_result(response).unwrap_err(),
            LookupError::NotResolvable(GENERIC_UNAVAILABLE.to_string())
        );
    }
}
