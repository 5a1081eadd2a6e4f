//! Worker thread implementation for message delivery.
//!
//! This module implements the background worker that performs the outbound
//! HTTP request so the interactive thread never blocks on the network. The
//! transport is initialized lazily on first use and can be swapped for a
//! scripted implementation under test.

use std::sync::mpsc::{Receiver, Sender};

use crate::domain::error::{FolioError, Result};
use crate::domain::ContactMessage;
use crate::infrastructure::Endpoint;
use crate::transport::{HttpTransport, Transport};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Background worker delivering contact messages.
///
/// Owns the transport exclusively; one worker serves one endpoint for its
/// whole lifetime.
pub struct FolioWorker {
    endpoint: Endpoint,
    /// Transport, initialized lazily on first message.
    transport: Option<Box<dyn Transport>>,
}

impl FolioWorker {
    /// Creates a worker that will deliver to `endpoint`.
    ///
    /// The HTTP transport is not constructed until the first message arrives,
    /// so worker startup cannot fail.
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            transport: None,
        }
    }

    /// Creates a worker with an explicit transport, bypassing lazy HTTP
    /// initialization. Used by tests to script settlements.
    #[must_use]
    pub fn with_transport(endpoint: Endpoint, transport: Box<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport: Some(transport),
        }
    }

    /// Returns the transport, constructing the HTTP implementation on first use.
    fn get_transport(&mut self) -> Result<&dyn Transport> {
        if self.transport.is_none() {
            let transport = HttpTransport::new(&self.endpoint)?;
            self.transport = Some(Box::new(transport));
        }
        self.transport
            .as_deref()
            .ok_or_else(|| FolioError::Worker("transport not initialized".to_string()))
    }

    /// Processes one worker message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message_name(&message));
        let _guard = span.entered();

        match message {
            WorkerMessage::SendMessage { email, message } => {
                let contact = ContactMessage::new(email, message);
                match self
                    .get_transport()
                    .and_then(|transport| transport.send_message(&contact))
                {
                    Ok(outcome) => {
                        tracing::debug!(
                            status = outcome.status,
                            has_error_field = outcome.error.is_some(),
                            malformed_body = outcome.malformed_body,
                            "message settled"
                        );
                        WorkerResponse::MessageSettled {
                            status: outcome.status,
                            error: outcome.error,
                            malformed_body: outcome.malformed_body,
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "message send failed");
                        WorkerResponse::SendFailed {
                            detail: e.to_string(),
                        }
                    }
                }
            }
        }
    }

    /// Runs the worker loop over JSON channel payloads.
    ///
    /// Each inbound payload is deserialized into a [`WorkerMessage`],
    /// processed, and the [`WorkerResponse`] is serialized back onto the
    /// outbox. Undecodable payloads are logged and skipped. The loop ends
    /// when the inbox closes (the interactive side dropped its sender) or
    /// when the outbox has no receiver left, which is the teardown path.
    pub fn run(mut self, inbox: Receiver<String>, outbox: Sender<String>) {
        for payload in inbox {
            let message: WorkerMessage = match serde_json::from_str(&payload) {
                Ok(message) => message,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker message");
                    continue;
                }
            };

            let response = self.handle_message(message);

            match serde_json::to_string(&response) {
                Ok(payload) => {
                    if outbox.send(payload).is_err() {
                        tracing::debug!("worker outbox closed, stopping");
                        return;
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to serialize worker response");
                }
            }
        }
    }
}

fn message_name(message: &WorkerMessage) -> &'static str {
    match message {
        WorkerMessage::SendMessage { .. } => "SendMessage",
    }
}
