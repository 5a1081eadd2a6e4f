//! Domain layer for the folio-core crate.
//!
//! This module contains the core domain types shared by the rest of the crate,
//! independent of transport, rendering, or configuration concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`message`]: Contact message model (also the outbound wire body)
//!
//! # Examples
//!
//! ```
//! use folio_core::domain::{ContactMessage, Result};
//!
//! fn compose() -> Result<ContactMessage> {
//!     Ok(ContactMessage::new(
//!         "visitor@example.com".to_string(),
//!         "Hello".to_string(),
//!     ))
//! }
//! ```

pub mod error;
pub mod message;

pub use error::{FolioError, Result};
pub use message::ContactMessage;
