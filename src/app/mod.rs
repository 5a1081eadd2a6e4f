//! Application layer coordinating state, events, and actions.
//!
//! This module composes the crate's two behavioral units behind a single
//! event-driven surface, sitting between the driver (main.rs) and the
//! decoder/contact/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Driver Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                             ↑                                  ↓
//!                             └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
