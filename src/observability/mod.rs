//! File-backed logging setup.
//!
//! This module wires the `tracing` macros used throughout the crate to a
//! file under the per-user data directory, keeping the animated terminal
//! output clean.
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` config option, default
//! `"info"`. The filter accepts any `tracing_subscriber::EnvFilter`
//! directive, so per-module levels work too.
//!
//! # Usage
//!
//! Initialize early in driver startup:
//!
//! ```
//! use folio_core::observability::init_tracing;
//! use folio_core::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("driver initialized");
//! ```

mod init;

pub use init::init_tracing;
