//! User-facing message derivation from endpoint responses.
//!
//! The mapping from `(HTTP status, optional error field)` to a displayed
//! message is a pure function, kept separate from the transport call so it
//! can be tested without any network machinery.

/// Shown for HTTP 500 class problems reported by the endpoint.
pub const SERVER_ERROR: &str = "There was a problem with the server, try again later";

/// Shown for HTTP 404 and for requests that never reached the endpoint.
pub const CONNECTION_ERROR: &str =
    "There was a problem connecting to the server. Make sure you are connected to the internet";

/// Fallback passed by the submission flow for any other failure.
pub const SEND_FALLBACK: &str = "There was a problem sending your message";

/// Default fallback when a caller does not supply its own.
pub const DEFAULT_FALLBACK: &str = "There was a problem with your request";

/// Derives the user-facing error message for a settled response.
///
/// Returns `None` for a 200 response: the submission succeeded and no message
/// should be shown. For any other status, precedence is:
///
/// 1. A non-empty `error_message` from the response body, passed through
///    verbatim (the endpoint phrases these for display).
/// 2. A dedicated message for status 500 or 404.
/// 3. The caller-supplied `fallback`.
///
/// # Examples
///
/// ```
/// use folio_core::contact::status::{status_error, DEFAULT_FALLBACK};
///
/// assert_eq!(status_error(200, None, DEFAULT_FALLBACK), None);
/// assert_eq!(
///     status_error(400, Some("Email is required"), DEFAULT_FALLBACK).as_deref(),
///     Some("Email is required"),
/// );
/// ```
#[must_use]
pub fn status_error(status: u16, error_message: Option<&str>, fallback: &str) -> Option<String> {
    if status == 200 {
        return None;
    }

    if let Some(message) = error_message {
        if !message.is_empty() {
            return Some(message.to_string());
        }
    }

    Some(match status {
        500 => SERVER_ERROR.to_string(),
        404 => CONNECTION_ERROR.to_string(),
        _ => fallback.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_has_no_error() {
        assert_eq!(status_error(200, None, DEFAULT_FALLBACK), None);
    }

    #[test]
    fn ok_status_wins_over_error_field() {
        assert_eq!(status_error(200, Some("ignored"), DEFAULT_FALLBACK), None);
    }

    #[test]
    fn explicit_error_field_passes_through_verbatim() {
        assert_eq!(
            status_error(400, Some("Email is required"), SEND_FALLBACK).as_deref(),
            Some("Email is required"),
        );
        // Even for statuses that have a dedicated message.
        assert_eq!(
            status_error(500, Some("quota exceeded"), SEND_FALLBACK).as_deref(),
            Some("quota exceeded"),
        );
    }

    #[test]
    fn empty_error_field_is_ignored() {
        assert_eq!(
            status_error(500, Some(""), SEND_FALLBACK).as_deref(),
            Some(SERVER_ERROR),
        );
    }

    #[test]
    fn dedicated_messages_for_500_and_404() {
        assert_eq!(status_error(500, None, SEND_FALLBACK).as_deref(), Some(SERVER_ERROR));
        assert_eq!(status_error(404, None, SEND_FALLBACK).as_deref(), Some(CONNECTION_ERROR));
    }

    #[test]
    fn other_statuses_use_the_fallback() {
        assert_eq!(status_error(400, None, SEND_FALLBACK).as_deref(), Some(SEND_FALLBACK));
        assert_eq!(status_error(403, None, SEND_FALLBACK).as_deref(), Some(SEND_FALLBACK));
        assert_eq!(status_error(502, None, DEFAULT_FALLBACK).as_deref(), Some(DEFAULT_FALLBACK));
    }
}
