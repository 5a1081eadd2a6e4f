//! Error types for the folio-core crate.
//!
//! This module defines the centralized error type [`FolioError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for folio-core operations.
///
/// This enum consolidates all error conditions that can occur while running the
/// interaction core, from outbound message delivery to I/O failures and
/// configuration issues. Submission failures surfaced to the user go through the
/// submission controller's error phase instead; these variants cover the
/// internal plumbing.
///
/// # Examples
///
/// ```
/// use folio_core::domain::FolioError;
///
/// fn validate_config() -> Result<(), FolioError> {
///     Err(FolioError::Config("fps must be greater than zero".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// The outbound request could not be sent or produced no response.
    ///
    /// Covers connection failures, DNS errors, and timeouts. The string carries
    /// the transport layer's own description for logging; the user-facing
    /// message is derived separately by the submission controller.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a built-in or custom theme file cannot be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when a message to or from the submission worker cannot be
    /// delivered or decoded.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for folio-core operations.
///
/// This is a type alias for `std::result::Result<T, FolioError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use folio_core::domain::Result;
///
/// fn resolve_endpoint() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, FolioError>;
