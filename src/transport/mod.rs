//! Outbound message transport.
//!
//! This module carries the contact message to the remote endpoint and reports
//! how the request settled.
//!
//! # Modules
//!
//! - `backend`: Transport trait abstraction and settlement type
//! - `http`: Blocking HTTP implementation over the functions gateway

pub mod backend;
pub mod http;

pub use backend::{SendOutcome, Transport};
pub use http::HttpTransport;
