//! Submission lifecycle state machine.
//!
//! This module implements [`SubmissionController`], which owns the phase of a
//! contact form submission from the moment the user submits until the request
//! settles. The controller never touches the network itself: the surrounding
//! application issues the request (through the worker) exactly when
//! [`submit`](SubmissionController::submit) grants it, and feeds the
//! settlement back in.
//!
//! # State machine
//!
//! ```text
//! Idle --submit--> Sending --success--> Complete
//!                     |  ^
//!              failure|  |submit
//!                     v  |
//!                   Error(message)
//! ```
//!
//! `Complete` is terminal; the surrounding UI offers navigation away rather
//! than a path back into the form. A submit while `Sending` is dropped, not
//! queued, which guarantees at most one request in flight per controller.

use chrono::{DateTime, Utc};

use super::status::{status_error, CONNECTION_ERROR, SEND_FALLBACK};

/// Phase of the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// No submission attempted yet, or none since construction.
    Idle,
    /// A request is in flight; further submits are dropped.
    Sending,
    /// The endpoint accepted the message. Terminal.
    Complete,
    /// The last attempt failed; a new submit may be issued directly.
    Error,
}

/// State machine for one contact form session.
///
/// Constructed in [`SubmitPhase::Idle`] when the form mounts; reset only by
/// constructing a fresh controller. Field values live with the caller; the
/// controller tracks phase and the derived error message only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionController {
    phase: SubmitPhase,
    last_error: Option<String>,
    completed_at: Option<DateTime<Utc>>,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    /// Creates a controller in the idle phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SubmitPhase::Idle,
            last_error: None,
            completed_at: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// The displayed error message, present only in [`SubmitPhase::Error`].
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// When the submission completed, present only in [`SubmitPhase::Complete`].
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Requests a submission.
    ///
    /// Returns `true` when the controller entered [`SubmitPhase::Sending`] and
    /// the caller must issue exactly one outbound request. Returns `false`
    /// when the request was dropped: either a submission is already in flight
    /// or the session already completed.
    pub fn submit(&mut self) -> bool {
        match self.phase {
            SubmitPhase::Sending => {
                tracing::debug!("submit ignored, request already in flight");
                false
            }
            SubmitPhase::Complete => {
                tracing::debug!("submit ignored, session already complete");
                false
            }
            SubmitPhase::Idle | SubmitPhase::Error => {
                self.last_error = None;
                self.phase = SubmitPhase::Sending;
                tracing::debug!("submission started");
                true
            }
        }
    }

    /// Settles the in-flight request from an endpoint response.
    ///
    /// `malformed_body` marks a response whose body could not be parsed as
    /// JSON; that is itself a failure and maps to the generic send fallback
    /// regardless of status. Otherwise the message is derived by
    /// [`status_error`]: `None` completes the session, `Some` enters the
    /// error phase with that message.
    ///
    /// Settlements arriving in any phase other than [`SubmitPhase::Sending`]
    /// are ignored; a controller that was reconstructed or never submitted
    /// cannot be mutated by a stale response.
    pub fn settle_response(&mut self, status: u16, error_field: Option<&str>, malformed_body: bool) {
        if self.phase != SubmitPhase::Sending {
            tracing::debug!(phase = ?self.phase, "settlement ignored outside sending phase");
            return;
        }

        if malformed_body {
            tracing::debug!(status, "response body was not valid JSON");
            self.enter_error(SEND_FALLBACK.to_string());
            return;
        }

        match status_error(status, error_field, SEND_FALLBACK) {
            None => {
                self.phase = SubmitPhase::Complete;
                self.completed_at = Some(Utc::now());
                tracing::debug!("submission complete");
            }
            Some(message) => {
                tracing::debug!(status, error = %message, "submission failed");
                self.enter_error(message);
            }
        }
    }

    /// Settles the in-flight request after a transport failure.
    ///
    /// Used when the request could not be sent or no response arrived. The
    /// displayed message is the connection message; callers log the transport
    /// detail separately. Ignored outside [`SubmitPhase::Sending`].
    pub fn settle_transport_failure(&mut self) {
        if self.phase != SubmitPhase::Sending {
            tracing::debug!(phase = ?self.phase, "transport failure ignored outside sending phase");
            return;
        }
        self.enter_error(CONNECTION_ERROR.to_string());
    }

    fn enter_error(&mut self, message: String) {
        self.phase = SubmitPhase::Error;
        self.last_error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::status::{CONNECTION_ERROR, SEND_FALLBACK, SERVER_ERROR};

    #[test]
    fn ok_response_completes() {
        let mut controller = SubmissionController::new();
        assert!(controller.submit());
        assert_eq!(controller.phase(), SubmitPhase::Sending);

        controller.settle_response(200, None, false);
        assert_eq!(controller.phase(), SubmitPhase::Complete);
        assert_eq!(controller.last_error(), None);
        assert!(controller.completed_at().is_some());
    }

    #[test]
    fn server_error_message_is_exact() {
        let mut controller = SubmissionController::new();
        controller.submit();
        controller.settle_response(500, None, false);
        assert_eq!(controller.phase(), SubmitPhase::Error);
        assert_eq!(controller.last_error(), Some(SERVER_ERROR));
    }

    #[test]
    fn not_found_message_is_exact() {
        let mut controller = SubmissionController::new();
        controller.submit();
        controller.settle_response(404, None, false);
        assert_eq!(controller.last_error(), Some(CONNECTION_ERROR));
    }

    #[test]
    fn explicit_error_field_is_displayed_verbatim() {
        let mut controller = SubmissionController::new();
        controller.submit();
        controller.settle_response(400, Some("Email is required"), false);
        assert_eq!(controller.last_error(), Some("Email is required"));
    }

    #[test]
    fn other_failures_use_the_send_fallback() {
        let mut controller = SubmissionController::new();
        controller.submit();
        controller.settle_response(400, None, false);
        assert_eq!(controller.last_error(), Some(SEND_FALLBACK));
    }

    #[test]
    fn malformed_body_fails_even_on_ok_status() {
        let mut controller = SubmissionController::new();
        controller.submit();
        controller.settle_response(200, None, true);
        assert_eq!(controller.phase(), SubmitPhase::Error);
        assert_eq!(controller.last_error(), Some(SEND_FALLBACK));
    }

    #[test]
    fn transport_failure_shows_connection_message() {
        let mut controller = SubmissionController::new();
        controller.submit();
        controller.settle_transport_failure();
        assert_eq!(controller.phase(), SubmitPhase::Error);
        assert_eq!(controller.last_error(), Some(CONNECTION_ERROR));
    }

    #[test]
    fn resubmit_while_sending_is_dropped() {
        let mut controller = SubmissionController::new();
        assert!(controller.submit());
        assert!(!controller.submit());
        assert_eq!(controller.phase(), SubmitPhase::Sending);
    }

    #[test]
    fn error_phase_allows_direct_resubmit() {
        let mut controller = SubmissionController::new();
        controller.submit();
        controller.settle_response(500, None, false);
        assert_eq!(controller.phase(), SubmitPhase::Error);

        assert!(controller.submit());
        assert_eq!(controller.phase(), SubmitPhase::Sending);
        // The previous error is cleared on re-entry.
        assert_eq!(controller.last_error(), None);
    }

    #[test]
    fn complete_is_terminal() {
        let mut controller = SubmissionController::new();
        controller.submit();
        controller.settle_response(200, None, false);
        assert!(!controller.submit());
        assert_eq!(controller.phase(), SubmitPhase::Complete);
    }

    #[test]
    fn settlement_outside_sending_is_ignored() {
        let mut controller = SubmissionController::new();
        controller.settle_response(500, None, false);
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_eq!(controller.last_error(), None);

        controller.submit();
        controller.settle_response(200, None, false);
        // A stale duplicate settlement cannot leave Complete.
        controller.settle_response(500, None, false);
        assert_eq!(controller.phase(), SubmitPhase::Complete);
    }
}
