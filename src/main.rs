//! Demo driver and entry point.
//!
//! This binary is the thin shim between the terminal and the folio-core
//! library: it paces the animation frames, executes the actions returned by
//! the event handler, and owns the background worker that delivers the
//! contact message.
//!
//! # Usage
//!
//! ```text
//! folio-core                       # play the heading animation
//! folio-core <email> <message>     # animation, then submit a message
//! ```
//!
//! Configuration comes from `FOLIO_*` environment variables; see the crate
//! docs. Logs go to a file under the data directory so the repainted
//! animation line stays clean.
//!
//! # Frame pacing
//!
//! The driver answers every `Action::RequestFrame` with a future
//! `Event::Frame` after a short native sleep, deliberately faster than any
//! configured frame budget; the animator throttles itself. Dropping the
//! driver abandons the pending frame request and closes the worker inbox,
//! which is the teardown path for both callback registrations.

use std::collections::BTreeMap;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use folio_core::ui::{render_heading, render_status};
use folio_core::worker::{FolioWorker, WorkerMessage, WorkerResponse};
use folio_core::{handle_event, initialize, observability, Action, AppState, Config, Event, SubmitPhase};

/// Native callback interval, well under the default 24fps budget of ~42ms.
const NATIVE_FRAME: Duration = Duration::from_millis(8);

/// How long to wait for the worker to settle a submission.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Driver state wrapper.
///
/// Wraps the library's `AppState` with the scheduling and worker plumbing the
/// library treats as external: the pending frame registration and the worker
/// inbox sender.
struct Driver {
    /// Core application state from the library layer.
    state: AppState,

    /// Worker inbox for JSON-serialized messages.
    to_worker: Sender<String>,

    /// Whether a frame callback is registered for the next loop turn.
    frame_requested: bool,
}

impl Driver {
    fn new(state: AppState, to_worker: Sender<String>) -> Self {
        Self {
            state,
            to_worker,
            frame_requested: false,
        }
    }

    /// Handles one event and executes the returned actions.
    ///
    /// Returns `true` if the visible state changed.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.state, event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::RequestFrame => {
                self.frame_requested = true;
            }
            Action::PostToWorker(message) => {
                self.post_worker_message(message);
            }
        }
    }

    /// Posts a message to the worker thread as a JSON payload.
    ///
    /// Serialization and channel errors are logged, not propagated; a closed
    /// worker surfaces later as a missing settlement.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                if self.to_worker.send(payload).is_err() {
                    tracing::debug!("worker inbox closed");
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Plays the heading reveal to completion, repainting in place.
    fn run_reveal(&mut self) {
        self.dispatch(&Event::RevealStart { now: Instant::now() });
        self.repaint_heading();

        while std::mem::take(&mut self.frame_requested) {
            thread::sleep(NATIVE_FRAME);
            if self.dispatch(&Event::Frame { now: Instant::now() }) {
                self.repaint_heading();
            }
        }
        println!();
    }

    fn repaint_heading(&self) {
        print!(
            "\r{}",
            render_heading(self.state.decoder.frame(), &self.state.theme),
        );
        let _ = io::stdout().flush();
    }

    fn repaint_status(&self) {
        println!("{}", render_status(&self.state, &self.state.theme));
    }

    /// Submits a message and waits for the settlement.
    fn submit(&mut self, email: &str, message: &str, from_worker: &Receiver<String>) -> ExitCode {
        self.dispatch(&Event::EmailChanged(email.to_string()));
        self.dispatch(&Event::MessageChanged(message.to_string()));
        self.dispatch(&Event::Submit);

        if self.state.field_error.is_some() {
            self.repaint_status();
            return ExitCode::FAILURE;
        }
        self.repaint_status();

        while self.state.submission.phase() == SubmitPhase::Sending {
            match from_worker.recv_timeout(SETTLE_TIMEOUT) {
                Ok(payload) => match serde_json::from_str::<WorkerResponse>(&payload) {
                    Ok(response) => {
                        tracing::debug!(response = ?response, "worker response received");
                        self.dispatch(&Event::WorkerResponse(response));
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "failed to deserialize worker response");
                    }
                },
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => {
                    tracing::debug!("no worker response, giving up");
                    eprintln!("no response from the message worker");
                    return ExitCode::FAILURE;
                }
            }
        }

        self.repaint_status();
        match self.state.submission.phase() {
            SubmitPhase::Complete => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    let vars: BTreeMap<String, String> = env::vars().collect();
    let config = Config::from_env(&vars);
    observability::init_tracing(&config);

    let span = tracing::debug_span!("driver_startup");
    let _guard = span.entered();
    tracing::debug!(heading = %config.heading, environment = ?config.environment, "driver starting");

    let state = match initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("failed to initialize: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (to_worker, worker_inbox) = mpsc::channel();
    let (worker_outbox, from_worker) = mpsc::channel();
    let worker = FolioWorker::new(config.endpoint());
    let worker_handle = thread::spawn(move || worker.run(worker_inbox, worker_outbox));

    let mut driver = Driver::new(state, to_worker);
    driver.run_reveal();

    let args: Vec<String> = env::args().skip(1).collect();
    let exit = if let [email, message] = args.as_slice() {
        driver.submit(email, message, &from_worker)
    } else {
        if !args.is_empty() {
            eprintln!("usage: folio-core [<email> <message>]");
        }
        ExitCode::SUCCESS
    };

    // Closing the inbox ends the worker loop.
    drop(driver);
    let _ = worker_handle.join();
    exit
}
