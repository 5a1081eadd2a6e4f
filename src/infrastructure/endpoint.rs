//! Messaging endpoint resolution.
//!
//! The contact message is delivered to a serverless functions gateway whose
//! base URL depends on the deployment environment. The submission code treats
//! the base URL as injected configuration; this module is the single place
//! that knows how the per-environment URLs are assembled, and it accepts an
//! explicit override for self-hosted or test gateways.

use serde::{Deserialize, Serialize};

/// Gateway region hosting the functions.
const FUNCTIONS_REGION: &str = "us-east-1";

/// API id of the production gateway stage.
const PRODUCTION_API_ID: &str = "klcyd10c76";

/// API id of the development gateway stage.
const DEVELOPMENT_API_ID: &str = "5h36icx3yj";

/// Path of the message delivery function under the base URL.
const SEND_MESSAGE_PATH: &str = "/functions/sendMessage";

/// Deployment environment selecting the gateway stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Parses an environment flag value; anything but `production` is
    /// development.
    #[must_use]
    pub fn from_flag(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Stage name used in the gateway URL.
    #[must_use]
    pub const fn stage(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "dev",
        }
    }

    const fn api_id(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_ID,
            Self::Development => DEVELOPMENT_API_ID,
        }
    }
}

/// Resolved base URL of the messaging functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// Resolves the gateway URL for a deployment environment.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_core::infrastructure::endpoint::{Endpoint, Environment};
    ///
    /// let endpoint = Endpoint::for_environment(Environment::Development);
    /// assert!(endpoint.message_url().ends_with("/functions/sendMessage"));
    /// ```
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            base_url: format!(
                "https://{}.execute-api.{}.amazonaws.com/{}",
                environment.api_id(),
                FUNCTIONS_REGION,
                environment.stage(),
            ),
        }
    }

    /// Uses an explicitly configured base URL instead of the built-in
    /// gateways. A trailing slash is stripped so path joining stays uniform.
    #[must_use]
    pub fn from_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the message delivery function.
    #[must_use]
    pub fn message_url(&self) -> String {
        format!("{}{}", self.base_url, SEND_MESSAGE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_url_is_exact() {
        let endpoint = Endpoint::for_environment(Environment::Production);
        assert_eq!(
            endpoint.message_url(),
            "https://klcyd10c76.execute-api.us-east-1.amazonaws.com/production/functions/sendMessage",
        );
    }

    #[test]
    fn development_url_is_exact() {
        let endpoint = Endpoint::for_environment(Environment::Development);
        assert_eq!(
            endpoint.message_url(),
            "https://5h36icx3yj.execute-api.us-east-1.amazonaws.com/dev/functions/sendMessage",
        );
    }

    #[test]
    fn environment_flag_parsing() {
        assert_eq!(Environment::from_flag("production"), Environment::Production);
        assert_eq!(Environment::from_flag("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::from_flag("dev"), Environment::Development);
        assert_eq!(Environment::from_flag(""), Environment::Development);
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let endpoint = Endpoint::from_base_url("http://localhost:9000/");
        assert_eq!(endpoint.message_url(), "http://localhost:9000/functions/sendMessage");
    }
}
