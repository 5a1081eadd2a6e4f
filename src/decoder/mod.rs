//! Decoder text animation engine.
//!
//! This module implements the heading "decoding" effect: given a target
//! string, a time-evolving frame of revealed characters and flickering
//! placeholder glyphs, advancing left to right until the whole string is
//! resolved.
//!
//! # Modules
//!
//! - [`animator`]: The timing state machine producing output frames
//! - [`glyphs`]: The fixed decorative glyph set and its sampler

pub mod animator;
pub mod glyphs;

pub use animator::{DecoderAnimator, DecoderOptions, DecoderPhase, GlyphCell, GlyphKind};
pub use glyphs::{random_glyph, DECODER_GLYPHS};
