//! Background worker for outbound message delivery.
//!
//! This module implements the worker that performs the HTTP request off the
//! interactive thread, so the animation loop and the form stay responsive
//! while a submission is in flight. Messages cross the thread boundary as
//! JSON payloads.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and channel loop

pub mod handler;
pub mod messages;

pub use handler::FolioWorker;
pub use messages::{WorkerMessage, WorkerResponse};
