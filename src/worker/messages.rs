//! Worker message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the
//! interactive thread and the background worker that delivers contact
//! messages. Payloads cross the channel as JSON strings, so both enums are
//! serde types and the boundary stays inspectable in logs.

use serde::{Deserialize, Serialize};

use crate::domain::ContactMessage;

/// Messages sent from the interactive thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Deliver one contact message to the remote endpoint.
    SendMessage {
        /// Sender address for the reply.
        email: String,
        /// Free-form message body.
        message: String,
    },
}

impl WorkerMessage {
    /// Creates a delivery request from a validated contact message.
    #[must_use]
    pub fn send_message(contact: &ContactMessage) -> Self {
        Self::SendMessage {
            email: contact.email.clone(),
            message: contact.message.clone(),
        }
    }
}

/// Responses sent from the worker back to the interactive thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The request reached the endpoint and a response arrived.
    MessageSettled {
        /// HTTP status of the response.
        status: u16,
        /// The response body's optional `error` field.
        error: Option<String>,
        /// Whether the response body failed to parse as JSON.
        malformed_body: bool,
    },

    /// The request could not be sent or produced no response.
    SendFailed {
        /// Transport-level detail for logging; not shown to the user.
        detail: String,
    },
}
