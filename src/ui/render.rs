//! Terminal rendering of decoder frames and form status.
//!
//! Turns application state into ANSI-styled strings for the demo driver.
//! Revealed heading characters render in the heading color; placeholder
//! glyphs render dimmed in the code color, the terminal analog of the
//! reduced-opacity glyphs in the source design.

use crate::app::AppState;
use crate::contact::SubmitPhase;
use crate::decoder::{GlyphCell, GlyphKind};

use super::theme::Theme;

/// Completion banner shown once the endpoint accepts the message.
const COMPLETE_TITLE: &str = "Message Sent";

/// Completion detail line.
const COMPLETE_TEXT: &str = "I'll get back to you within a couple days, sit tight";

/// Progress label shown while a submission is in flight.
const SENDING_TEXT: &str = "Sending...";

/// Renders the animated heading line.
#[must_use]
pub fn render_heading(frame: &[GlyphCell], theme: &Theme) -> String {
    let mut out = String::new();
    for cell in frame {
        match cell.kind {
            GlyphKind::Actual => {
                out.push_str(Theme::bold());
                out.push_str(&Theme::fg(&theme.colors.heading_fg));
            }
            GlyphKind::Code => {
                out.push_str(Theme::dim());
                out.push_str(&Theme::fg(&theme.colors.code_fg));
            }
        }
        out.push(cell.ch);
        out.push_str(Theme::reset());
    }
    out
}

/// Renders the form status area below the heading.
///
/// One line per visible state: a field validation error, the sending
/// indicator, the submission error, or the completion banner. Idle state
/// with no error renders nothing.
#[must_use]
pub fn render_status(state: &AppState, theme: &Theme) -> String {
    if let Some(field_error) = &state.field_error {
        return format!(
            "{}{}{}",
            Theme::fg(&theme.colors.error_fg),
            field_error,
            Theme::reset(),
        );
    }

    match state.submission.phase() {
        SubmitPhase::Idle => String::new(),
        SubmitPhase::Sending => format!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            SENDING_TEXT,
            Theme::reset(),
        ),
        SubmitPhase::Error => {
            let message = state.submission.last_error().unwrap_or_default();
            format!(
                "{}{}{}",
                Theme::fg(&theme.colors.error_fg),
                message,
                Theme::reset(),
            )
        }
        SubmitPhase::Complete => {
            let sent_at = state
                .submission
                .completed_at()
                .map(|at| at.format(" (%H:%M UTC)").to_string())
                .unwrap_or_default();
            format!(
                "{}{}{}{}\n{}{}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.success_fg),
                COMPLETE_TITLE,
                Theme::reset(),
                Theme::fg(&theme.colors.text_dim),
                COMPLETE_TEXT,
                sent_at,
                Theme::reset(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::decoder::DecoderOptions;
    use crate::worker::WorkerResponse;

    fn strip_ansi(styled: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for ch in styled.chars() {
            if in_escape {
                if ch == 'm' {
                    in_escape = false;
                }
            } else if ch == '\u{001b}' {
                in_escape = true;
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn submitted_state() -> AppState {
        let mut state =
            AppState::new("hi", DecoderOptions::default(), Theme::default()).unwrap();
        handle_event(&mut state, &Event::EmailChanged("a@b.com".to_string())).unwrap();
        handle_event(&mut state, &Event::MessageChanged("hello".to_string())).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();
        state
    }

    #[test]
    fn heading_renders_every_cell_once() {
        let frame = vec![GlyphCell::actual('h'), GlyphCell::code('ア')];
        let line = render_heading(&frame, &Theme::default());
        assert_eq!(strip_ansi(&line), "hア");
    }

    #[test]
    fn sending_state_renders_the_progress_label() {
        let state = submitted_state();
        assert_eq!(strip_ansi(&render_status(&state, &state.theme)), SENDING_TEXT);
    }

    #[test]
    fn error_state_renders_the_derived_message() {
        let mut state = submitted_state();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::MessageSettled {
                status: 400,
                error: Some("Email is required".to_string()),
                malformed_body: false,
            }),
        )
        .unwrap();
        let status = render_status(&state, &state.theme);
        assert_eq!(strip_ansi(&status), "Email is required");
    }

    #[test]
    fn complete_state_renders_the_banner() {
        let mut state = submitted_state();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::MessageSettled {
                status: 200,
                error: None,
                malformed_body: false,
            }),
        )
        .unwrap();
        let status = strip_ansi(&render_status(&state, &state.theme));
        assert!(status.starts_with(COMPLETE_TITLE));
        assert!(status.contains(COMPLETE_TEXT));
    }

    #[test]
    fn idle_state_renders_nothing() {
        let state = AppState::new("hi", DecoderOptions::default(), Theme::default()).unwrap();
        assert!(render_status(&state, &state.theme).is_empty());
    }
}
