//! Blocking HTTP implementation of the message transport.

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::domain::error::{FolioError, Result};
use crate::domain::ContactMessage;
use crate::infrastructure::Endpoint;

use super::backend::{SendOutcome, Transport};

/// Expected shape of the endpoint's JSON response body.
///
/// The endpoint optionally reports a display-ready `error` string; any other
/// fields are ignored.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    error: Option<String>,
}

/// Delivers contact messages over HTTP to the functions gateway.
///
/// Runs on the worker thread, so the blocking client keeps the interactive
/// thread free. One instance owns its connection pool for the lifetime of the
/// worker.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpTransport {
    /// Creates a transport posting to the endpoint's message function.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Transport`] if the HTTP client cannot be
    /// constructed (for example when the TLS backend fails to initialize).
    pub fn new(endpoint: &Endpoint) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| FolioError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: endpoint.message_url(),
        })
    }
}

impl Transport for HttpTransport {
    fn send_message(&self, message: &ContactMessage) -> Result<SendOutcome> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(message)
            .send()
            .map_err(|e| FolioError::Transport(e.to_string()))?;

        let status = response.status().as_u16();

        match response.json::<MessageResponse>() {
            Ok(body) => Ok(SendOutcome {
                status,
                error: body.error,
                malformed_body: false,
            }),
            Err(e) => {
                tracing::debug!(status, error = %e, "response body is not valid JSON");
                Ok(SendOutcome {
                    status,
                    error: None,
                    malformed_body: true,
                })
            }
        }
    }
}
