//! Transport abstraction for message delivery.
//!
//! This module defines the [`Transport`] trait that abstracts over the HTTP
//! layer actually carrying a contact message. The seam exists for the same
//! reason the rest of the crate is callback-driven: the submission state
//! machine and the worker can be exercised under test with a scripted
//! transport, without any network.
//!
//! # Design Philosophy
//!
//! The trait covers exactly one use case, delivering one message and
//! reporting how the endpoint settled it. Transport-level failure (the
//! request never produced a response) is the `Err` side; everything that got
//! an HTTP response back, including non-2xx statuses and unparseable bodies,
//! is an `Ok` settlement for the controller to interpret.

use crate::domain::error::Result;
use crate::domain::ContactMessage;

/// How the endpoint settled a delivered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// HTTP status of the response.
    pub status: u16,
    /// The optional `error` field of the response body, when present.
    pub error: Option<String>,
    /// Whether the response body failed to parse as JSON. When set, `error`
    /// is `None` and the settlement counts as a failure regardless of status.
    pub malformed_body: bool,
}

/// Abstraction over the outbound message delivery channel.
///
/// Implementations must be safe to move onto the worker thread.
///
/// # Implementations
///
/// - [`HttpTransport`](crate::transport::HttpTransport): blocking HTTP POST
///   to the configured gateway (default)
pub trait Transport: Send {
    /// Delivers one contact message and reports the settlement.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Transport`](crate::domain::FolioError::Transport)
    /// when the request could not be sent or no response was received.
    fn send_message(&self, message: &ContactMessage) -> Result<SendOutcome>;
}
