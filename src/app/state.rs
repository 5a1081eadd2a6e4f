//! Application state container.
//!
//! This module defines [`AppState`], which composes the two independent
//! behavioral units of the crate: the decoder animation for the page heading
//! and the submission controller for the contact form. The state owns its
//! animator, its random source, and its controller exclusively; tearing the
//! state down tears everything down with it.
//!
//! # State Components
//!
//! - **Decoder**: Heading reveal animation, ticked by frame events
//! - **Submission**: Contact form phase machine and last error
//! - **Fields**: Current input values, mutated by edit events
//! - **Theme**: Color scheme used by the rendering layer

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::contact::{FieldError, FormFields, SubmissionController};
use crate::decoder::{DecoderAnimator, DecoderOptions};
use crate::domain::error::Result;
use crate::ui::theme::Theme;

/// Central application state for one page session.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Heading reveal animation.
    pub decoder: DecoderAnimator,

    /// Contact form submission lifecycle.
    pub submission: SubmissionController,

    /// Current form input values, owned here and read-only to the controller.
    pub fields: FormFields,

    /// Input-layer validation failure to display, if any.
    pub field_error: Option<FieldError>,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Decoder options, kept for animator reconstruction.
    options: DecoderOptions,

    /// Random source for placeholder glyph selection.
    rng: SmallRng,
}

impl AppState {
    /// Creates the application state for a heading text.
    ///
    /// # Errors
    ///
    /// Returns an error if the decoder options are invalid (zero fps).
    pub fn new(heading: &str, options: DecoderOptions, theme: Theme) -> Result<Self> {
        Ok(Self {
            decoder: DecoderAnimator::new(heading, options)?,
            submission: SubmissionController::new(),
            fields: FormFields::default(),
            field_error: None,
            theme,
            options,
            rng: SmallRng::from_entropy(),
        })
    }

    /// Advances the decoder animation for one frame callback.
    ///
    /// Returns `true` when the visible frame changed.
    pub fn tick_decoder(&mut self, now: Instant) -> bool {
        self.decoder.tick(now, &mut self.rng)
    }

    /// Replaces the animator for a new heading text.
    ///
    /// The decoder contract makes restarts reconstruction-only; this is the
    /// reconstruction path, used when the target text changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored decoder options are invalid, which
    /// cannot happen for a state that constructed successfully.
    pub fn reset_decoder(&mut self, heading: &str) -> Result<()> {
        self.decoder = DecoderAnimator::new(heading, self.options)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::DecoderPhase;
    use std::time::Duration;

    #[test]
    fn reset_reconstructs_the_animator() {
        let mut state =
            AppState::new("one", DecoderOptions::default(), Theme::default()).unwrap();
        let start = Instant::now();
        state.decoder.begin(start);
        state.tick_decoder(start + Duration::from_secs(10));
        assert_eq!(state.decoder.phase(), DecoderPhase::Revealing);

        state.reset_decoder("two").unwrap();
        assert_eq!(state.decoder.phase(), DecoderPhase::Idle);
    }
}
