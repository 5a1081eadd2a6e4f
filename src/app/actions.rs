//! Actions representing side effects to be executed by the driver.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing an event. Actions are the boundary
//! between the pure state transitions in the application layer and the
//! effectful scheduling and messaging owned by the driver: registering the
//! next frame callback, or posting a request to the background worker. A
//! driver that is being torn down simply discards the returned actions,
//! which is how pending callbacks are canceled.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Registers the next frame callback for the decoder animation.
    ///
    /// Emitted while the animator wants further frames; the driver answers
    /// with a future `Event::Frame`. Dropping the action instead of
    /// executing it cancels the animation cleanly.
    RequestFrame,

    /// Posts a message to the background worker.
    ///
    /// Emitted exactly once per granted submission, keeping the
    /// one-request-in-flight invariant observable at the action level.
    PostToWorker(WorkerMessage),
}
