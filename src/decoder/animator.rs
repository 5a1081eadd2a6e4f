//! Decoder text animation state machine.
//!
//! This module implements [`DecoderAnimator`], the timing core behind the
//! "decoding" heading effect: characters resolve left to right while the
//! unresolved tail flickers with random glyphs. The animator is a passive
//! state machine driven by monotonic instants supplied by the caller, which
//! keeps it deterministic under test and makes teardown trivial: once the
//! owner stops ticking and drops it, nothing can fire late.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --begin--> Delaying --delay elapsed--> Revealing --all revealed--> Complete
//!   ^                |
//!   └----cancel------┘
//! ```
//!
//! A reveal in progress is not cancelable; only the pending start delay is.
//! Restarting requires constructing a fresh animator.
//!
//! # Frame pacing
//!
//! The caller's frame callbacks may arrive at any native rate. The animator
//! throttles internally: a new frame is produced only once the elapsed time
//! since the last produced frame reaches the frame budget (`1000 / fps` ms).
//! Callbacks arriving earlier keep the loop alive but change nothing.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::domain::error::{FolioError, Result};

use super::glyphs::random_glyph;

/// How one output position is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    /// The true character at this position has been revealed.
    Actual,
    /// The position still shows a random placeholder glyph.
    Code,
}

/// One character cell of the animator's output frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    /// Whether the cell shows the real character or a placeholder.
    pub kind: GlyphKind,
    /// The character to display.
    pub ch: char,
}

impl GlyphCell {
    /// A revealed cell carrying the true character.
    #[must_use]
    pub const fn actual(ch: char) -> Self {
        Self { kind: GlyphKind::Actual, ch }
    }

    /// A placeholder cell carrying a decorative glyph.
    #[must_use]
    pub const fn code(ch: char) -> Self {
        Self { kind: GlyphKind::Code, ch }
    }

    /// The single blank placeholder shown before the animation starts.
    ///
    /// A `char` cannot be empty, so "blank" renders as a space.
    #[must_use]
    pub const fn blank() -> Self {
        Self::code(' ')
    }
}

/// Current phase of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderPhase {
    /// Constructed but not started; shows the blank placeholder frame.
    Idle,
    /// Start was signaled; waiting out the initial delay.
    Delaying,
    /// The frame loop is producing reveal frames.
    Revealing,
    /// Every character is revealed; no further frames are wanted.
    Complete,
}

/// Timing options for the decoder animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Reveal pacing: one additional character resolves per `offset` of
    /// animation time.
    pub offset: Duration,
    /// Wait between the start signal and the first frame.
    pub delay: Duration,
    /// Target frame rate for placeholder re-rolls. Must be greater than zero.
    pub fps: u32,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            offset: Duration::from_millis(100),
            delay: Duration::from_millis(300),
            fps: 24,
        }
    }
}

/// State machine that reveals a target string over time.
///
/// Constructed per target text; restart only via reconstruction. Ticked with
/// monotonic instants by the owning driver, with an injected random source
/// for placeholder glyph selection.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use folio_core::decoder::{DecoderAnimator, DecoderOptions};
///
/// let mut animator = DecoderAnimator::new("hi", DecoderOptions::default())?;
/// let start = Instant::now();
/// animator.begin(start);
/// let mut rng = rand::thread_rng();
/// animator.tick(start + Duration::from_millis(500), &mut rng);
/// # Ok::<(), folio_core::domain::FolioError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DecoderAnimator {
    /// Characters of the target text, in reveal order.
    content: Vec<char>,
    options: DecoderOptions,
    /// Minimum elapsed time between produced frames, `1000 / fps` ms.
    frame_budget: Duration,
    phase: DecoderPhase,
    /// When `begin` was called; set only while `Delaying`.
    delay_started: Option<Instant>,
    /// When the reveal loop started; set from the tick that ends the delay.
    started_at: Option<Instant>,
    /// Elapsed animation time at the last produced frame. Reveal progress is
    /// derived from this value, not from raw elapsed time, so progress only
    /// advances when a frame is actually produced.
    last_update: Duration,
    frame: Vec<GlyphCell>,
}

impl DecoderAnimator {
    /// Creates an animator for `text`.
    ///
    /// An empty `text` is trivially terminal: the animator constructs directly
    /// in [`DecoderPhase::Complete`] with an empty frame.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if `options.fps` is zero, which would
    /// leave the frame budget undefined.
    pub fn new(text: &str, options: DecoderOptions) -> Result<Self> {
        if options.fps == 0 {
            return Err(FolioError::Config(
                "decoder fps must be greater than zero".to_string(),
            ));
        }

        let content: Vec<char> = text.chars().collect();
        let frame_budget = Duration::from_secs_f64(1.0 / f64::from(options.fps));

        let (phase, frame) = if content.is_empty() {
            (DecoderPhase::Complete, Vec::new())
        } else {
            (DecoderPhase::Idle, vec![GlyphCell::blank()])
        };

        Ok(Self {
            content,
            options,
            frame_budget,
            phase,
            delay_started: None,
            started_at: None,
            last_update: Duration::ZERO,
            frame,
        })
    }

    /// Signals the start of the animation.
    ///
    /// Enters the delay wait; the first reveal frame appears once the delay
    /// and the first frame budget have both elapsed. No-op unless the
    /// animator is still [`DecoderPhase::Idle`].
    pub fn begin(&mut self, now: Instant) {
        if self.phase != DecoderPhase::Idle {
            return;
        }
        tracing::debug!(delay_ms = self.options.delay.as_millis() as u64, "reveal scheduled");
        self.phase = DecoderPhase::Delaying;
        self.delay_started = Some(now);
    }

    /// Cancels a pending start delay.
    ///
    /// The discarded wait leaves the animator back in [`DecoderPhase::Idle`]
    /// showing the blank placeholder frame. A reveal that already started is
    /// unaffected; only the delay is cancelable.
    pub fn cancel(&mut self) {
        if self.phase != DecoderPhase::Delaying {
            return;
        }
        tracing::debug!("pending reveal canceled");
        self.phase = DecoderPhase::Idle;
        self.delay_started = None;
    }

    /// Advances the animation for one frame callback.
    ///
    /// Returns `true` if the visible frame changed. Callbacks arriving before
    /// the frame budget has elapsed (including duplicate or out-of-order
    /// instants) return `false` without touching the output; the caller keeps
    /// scheduling callbacks while [`needs_frame`](Self::needs_frame) holds.
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        match self.phase {
            DecoderPhase::Idle | DecoderPhase::Complete => false,
            DecoderPhase::Delaying => {
                let Some(since) = self.delay_started else {
                    return false;
                };
                if now.saturating_duration_since(since) < self.options.delay {
                    return false;
                }
                self.phase = DecoderPhase::Revealing;
                self.delay_started = None;
                self.started_at = Some(now);
                self.last_update = Duration::ZERO;
                false
            }
            DecoderPhase::Revealing => {
                let Some(start) = self.started_at else {
                    return false;
                };
                let elapsed = now.saturating_duration_since(start);
                if elapsed.saturating_sub(self.last_update) < self.frame_budget {
                    return false;
                }
                self.last_update = elapsed;
                let progress = self.reveal_progress();
                #[allow(clippy::cast_precision_loss)]
                let len = self.content.len() as f64;

                if progress >= len {
                    self.frame = self.content.iter().copied().map(GlyphCell::actual).collect();
                    self.phase = DecoderPhase::Complete;
                    tracing::debug!(chars = self.content.len(), "reveal complete");
                } else {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let revealed = progress.floor() as usize;
                    self.frame = self.compose_frame(revealed, rng);
                }
                true
            }
        }
    }

    /// Current output frame.
    #[must_use]
    pub fn frame(&self) -> &[GlyphCell] {
        &self.frame
    }

    /// Current animation phase.
    #[must_use]
    pub fn phase(&self) -> DecoderPhase {
        self.phase
    }

    /// Whether the owner should register another frame callback.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        matches!(self.phase, DecoderPhase::Delaying | DecoderPhase::Revealing)
    }

    /// Whether the full text has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == DecoderPhase::Complete
    }

    /// Reveal cursor in `[0, len]`, derived from throttled elapsed time.
    ///
    /// A zero `offset` reveals everything on the first produced frame.
    fn reveal_progress(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let len = self.content.len() as f64;
        let offset_ms = self.options.offset.as_secs_f64() * 1000.0;
        if offset_ms > 0.0 {
            self.last_update.as_secs_f64() * 1000.0 / offset_ms
        } else {
            len
        }
    }

    /// Composes a frame with `revealed` leading characters resolved and the
    /// remainder re-rolled from the glyph set.
    fn compose_frame<R: Rng>(&self, revealed: usize, rng: &mut R) -> Vec<GlyphCell> {
        self.content
            .iter()
            .enumerate()
            .map(|(index, &ch)| {
                if index < revealed {
                    GlyphCell::actual(ch)
                } else {
                    GlyphCell::code(random_glyph(rng))
                }
            })
            .collect()
    }
}
