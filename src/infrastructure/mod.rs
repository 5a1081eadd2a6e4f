//! Infrastructure layer for environment and filesystem concerns.
//!
//! This module keeps deployment details out of the behavioral core: which
//! gateway URL a given environment maps to, and where per-user data such as
//! log files lives.

pub mod endpoint;
pub mod paths;

pub use endpoint::{Endpoint, Environment};
pub use paths::{data_dir, expand_tilde};
