//! Event handling and state transition logic.
//!
//! This module implements the event handler that coordinates the two
//! behavioral units: frame events drive the decoder animation, submit events
//! and worker responses drive the submission lifecycle. It is the only place
//! that mutates [`AppState`], keeping the driver a thin executor of the
//! returned actions.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the driver or the worker channel
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via component methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Animation**: `RevealStart`, `RevealCancel`, `Frame`
//! - **Form input**: `EmailChanged`, `MessageChanged`
//! - **Submission**: `Submit`, `WorkerResponse`

use std::time::Instant;

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by the driver, user input, or worker responses.
///
/// Frame-related events carry the monotonic instant of the callback so state
/// transitions stay deterministic under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Signals the heading reveal to start (after its configured delay).
    RevealStart {
        /// Monotonic instant of the start signal.
        now: Instant,
    },

    /// Cancels a reveal whose start delay has not elapsed yet.
    RevealCancel,

    /// A frame callback fired.
    Frame {
        /// Monotonic instant of the callback.
        now: Instant,
    },

    /// The email input value changed.
    EmailChanged(String),

    /// The message input value changed.
    MessageChanged(String),

    /// The user requested a form submission.
    Submit,

    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the visible state changed, and the
/// side effects the driver must execute in order.
///
/// # Errors
///
/// Returns errors from state mutation methods. The current event set cannot
/// produce any, but the signature leaves room for handlers that can.
///
/// # Example
///
/// ```
/// use std::time::Instant;
/// use folio_core::app::{handle_event, AppState, Event};
/// use folio_core::decoder::DecoderOptions;
/// use folio_core::ui::Theme;
///
/// let mut state = AppState::new("Say hello", DecoderOptions::default(), Theme::default())?;
/// let (rendered, actions) = handle_event(&mut state, &Event::RevealStart { now: Instant::now() })?;
/// assert!(!rendered);
/// assert_eq!(actions.len(), 1);
/// # Ok::<(), folio_core::domain::FolioError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::RevealStart { now } => {
            state.decoder.begin(*now);
            Ok((false, frame_request(state)))
        }
        Event::RevealCancel => {
            state.decoder.cancel();
            Ok((false, vec![]))
        }
        Event::Frame { now } => {
            let changed = state.tick_decoder(*now);
            Ok((changed, frame_request(state)))
        }
        Event::EmailChanged(value) => {
            state.fields.email.clone_from(value);
            state.field_error = None;
            Ok((true, vec![]))
        }
        Event::MessageChanged(value) => {
            state.fields.message.clone_from(value);
            state.field_error = None;
            Ok((true, vec![]))
        }
        Event::Submit => match state.fields.validate() {
            Err(error) => {
                tracing::debug!(error = %error, "field validation failed");
                state.field_error = Some(error);
                Ok((true, vec![]))
            }
            Ok(contact) => {
                state.field_error = None;
                if state.submission.submit() {
                    Ok((
                        true,
                        vec![Action::PostToWorker(WorkerMessage::send_message(&contact))],
                    ))
                } else {
                    Ok((false, vec![]))
                }
            }
        },
        Event::WorkerResponse(response) => {
            match response {
                WorkerResponse::MessageSettled {
                    status,
                    error,
                    malformed_body,
                } => {
                    state
                        .submission
                        .settle_response(*status, error.as_deref(), *malformed_body);
                }
                WorkerResponse::SendFailed { detail } => {
                    tracing::debug!(detail = %detail, "transport failure reported by worker");
                    state.submission.settle_transport_failure();
                }
            }
            Ok((true, vec![]))
        }
    }
}

/// One `RequestFrame` action while the animator wants further callbacks.
fn frame_request(state: &AppState) -> Vec<Action> {
    if state.decoder.needs_frame() {
        vec![Action::RequestFrame]
    } else {
        vec![]
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::RevealStart { .. } => "RevealStart",
        Event::RevealCancel => "RevealCancel",
        Event::Frame { .. } => "Frame",
        Event::EmailChanged(_) => "EmailChanged",
        Event::MessageChanged(_) => "MessageChanged",
        Event::Submit => "Submit",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::status::SERVER_ERROR;
    use crate::contact::{FieldError, SubmitPhase};
    use crate::decoder::{DecoderOptions, DecoderPhase};
    use crate::ui::theme::Theme;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new("Say hello", DecoderOptions::default(), Theme::default()).unwrap()
    }

    fn filled_state() -> AppState {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::EmailChanged("visitor@example.com".to_string()),
        )
        .unwrap();
        handle_event(&mut state, &Event::MessageChanged("Hello!".to_string())).unwrap();
        state
    }

    fn outbound_count(actions: &[Action]) -> usize {
        actions
            .iter()
            .filter(|action| matches!(action, Action::PostToWorker(_)))
            .count()
    }

    #[test]
    fn reveal_start_requests_frames_until_complete() {
        let mut state = state();
        let start = Instant::now();

        let (_, actions) =
            handle_event(&mut state, &Event::RevealStart { now: start }).unwrap();
        assert_eq!(actions, vec![Action::RequestFrame]);

        // Drive frames until the reveal finishes; the final frame stops the chain.
        let mut now = start;
        for _ in 0..10_000 {
            now += Duration::from_millis(5);
            let (_, actions) = handle_event(&mut state, &Event::Frame { now }).unwrap();
            if actions.is_empty() {
                break;
            }
        }
        assert_eq!(state.decoder.phase(), DecoderPhase::Complete);
        let (rendered, actions) = handle_event(&mut state, &Event::Frame { now }).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn reveal_cancel_stops_the_chain() {
        let mut state = state();
        let start = Instant::now();
        handle_event(&mut state, &Event::RevealStart { now: start }).unwrap();
        handle_event(&mut state, &Event::RevealCancel).unwrap();

        let (rendered, actions) = handle_event(
            &mut state,
            &Event::Frame { now: start + Duration::from_secs(2) },
        )
        .unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.decoder.phase(), DecoderPhase::Idle);
    }

    #[test]
    fn submit_with_valid_fields_posts_exactly_one_message() {
        let mut state = filled_state();

        let (rendered, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(rendered);
        assert_eq!(outbound_count(&actions), 1);
        assert_eq!(state.submission.phase(), SubmitPhase::Sending);
    }

    #[test]
    fn rapid_double_submit_posts_exactly_one_message() {
        let mut state = filled_state();

        let (_, first) = handle_event(&mut state, &Event::Submit).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(outbound_count(&first) + outbound_count(&second), 1);
    }

    #[test]
    fn invalid_fields_never_reach_the_controller() {
        let mut state = state();
        let (rendered, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(rendered);
        assert!(actions.is_empty());
        assert_eq!(state.field_error, Some(FieldError::EmailRequired));
        assert_eq!(state.submission.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn editing_a_field_clears_the_field_error() {
        let mut state = state();
        handle_event(&mut state, &Event::Submit).unwrap();
        assert!(state.field_error.is_some());

        handle_event(
            &mut state,
            &Event::EmailChanged("visitor@example.com".to_string()),
        )
        .unwrap();
        assert!(state.field_error.is_none());
    }

    #[test]
    fn worker_settlement_drives_the_submission_phase() {
        let mut state = filled_state();
        handle_event(&mut state, &Event::Submit).unwrap();

        let (rendered, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::MessageSettled {
                status: 500,
                error: None,
                malformed_body: false,
            }),
        )
        .unwrap();
        assert!(rendered);
        assert!(actions.is_empty());
        assert_eq!(state.submission.phase(), SubmitPhase::Error);
        assert_eq!(state.submission.last_error(), Some(SERVER_ERROR));

        // Error phase resubmits directly into Sending.
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(outbound_count(&actions), 1);
        assert_eq!(state.submission.phase(), SubmitPhase::Sending);
    }

    #[test]
    fn send_failure_settles_with_connection_error() {
        let mut state = filled_state();
        handle_event(&mut state, &Event::Submit).unwrap();

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SendFailed {
                detail: "dns failure".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(state.submission.phase(), SubmitPhase::Error);
        assert_eq!(
            state.submission.last_error(),
            Some(crate::contact::status::CONNECTION_ERROR),
        );
    }
}
