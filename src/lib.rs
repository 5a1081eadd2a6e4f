//! folio-core: the interaction core of a personal portfolio site.
//!
//! folio-core implements the two behavioral units behind the site's contact
//! page:
//! - A decoder text animation that reveals the page heading character by
//!   character while the unresolved tail flickers with decorative glyphs
//! - A contact form submission lifecycle that delivers one message to a
//!   remote endpoint and derives user-facing outcomes from its responses
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Demo Driver (main.rs)                              │  ← Frame pacing, teardown
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - State container                                  │  ← Action dispatching
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Decoder       │   │ Contact       │   │ Worker        │
//! │ (decoder/)    │   │ (contact/)    │   │ (worker/)     │
//! │ - Animator    │   │ - Controller  │   │ - Delivery    │
//! │ - Glyph set   │   │ - Validation  │   │ - JSON IPC    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Transport & Infrastructure Layers          │
//! │  - Message model, errors (domain/)                  │
//! │  - Transport trait + HTTP (transport/)              │
//! │  - Endpoint resolution, paths (infrastructure/)     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation & Observability                       │
//! │  - Themed ANSI rendering (ui/)                      │
//! │  - File-backed logging (observability/)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`decoder`]: Heading reveal animation engine
//! - [`contact`]: Submission lifecycle, validation, message derivation
//! - [`domain`]: Core domain types (ContactMessage, errors)
//! - [`transport`]: Outbound delivery abstraction and HTTP implementation
//! - [`worker`]: Background worker for message delivery
//! - [`infrastructure`]: Endpoint resolution and platform paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-backed logging
//!
//! # Configuration
//!
//! The driver is configured through `FOLIO_*` environment variables:
//!
//! ```text
//! FOLIO_HEADING=Say hello      # animated heading text
//! FOLIO_OFFSET_MS=100          # reveal pacing per character
//! FOLIO_DELAY_MS=300           # wait before the reveal starts
//! FOLIO_FPS=24                 # placeholder re-roll rate
//! FOLIO_ENV=production         # endpoint environment (anything else: dev)
//! FOLIO_FUNCTIONS_URL=...      # explicit endpoint base URL override
//! FOLIO_THEME=light            # built-in theme name
//! FOLIO_THEME_FILE=~/t.toml    # custom theme file, takes precedence
//! FOLIO_TRACE_LEVEL=debug      # log filter
//! ```
//!
//! # Initialization Flow
//!
//! 1. Parse configuration from the environment
//! 2. Initialize tracing (optional, file-backed)
//! 3. Create [`AppState`] via [`initialize`]
//! 4. Spawn the delivery worker
//! 5. Drive events through [`handle_event`] and execute the returned actions

pub mod app;
pub mod contact;
pub mod decoder;
pub mod domain;
pub mod infrastructure;
pub mod transport;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use contact::{SubmissionController, SubmitPhase};
pub use decoder::{DecoderAnimator, DecoderOptions, DecoderPhase, GlyphCell, GlyphKind};
pub use domain::{ContactMessage, FolioError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

use infrastructure::{Endpoint, Environment};

/// Driver configuration parsed from environment variables.
///
/// Every field has a usable default; malformed values fall back rather than
/// fail, so the demo always starts.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text revealed by the heading animation. Default: `"Say hello"`.
    pub heading: String,

    /// Reveal pacing: one character per this many milliseconds. Default: 100.
    pub offset_ms: u64,

    /// Wait between the start signal and the first frame. Default: 300.
    pub delay_ms: u64,

    /// Placeholder re-roll frame rate. Default: 24; zero falls back to 24.
    pub fps: u32,

    /// Deployment environment selecting the endpoint stage. Default: dev.
    pub environment: Environment,

    /// Explicit endpoint base URL, overriding the environment stages.
    pub functions_url: Option<String>,

    /// Built-in theme name (`dark` or `light`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Log filter directive. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heading: "Say hello".to_string(),
            offset_ms: 100,
            delay_ms: 300,
            fps: 24,
            environment: Environment::Development,
            functions_url: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from an environment variable map.
    ///
    /// # Parsing Rules
    ///
    /// - `FOLIO_HEADING`: used as-is when non-empty
    /// - `FOLIO_OFFSET_MS`, `FOLIO_DELAY_MS`: `u64`, fall back on parse error
    /// - `FOLIO_FPS`: `u32`, must be positive, falls back to 24 otherwise
    /// - `FOLIO_ENV`: `production` selects the production stage, anything
    ///   else (or absence) the dev stage
    /// - `FOLIO_FUNCTIONS_URL`, `FOLIO_THEME`, `FOLIO_THEME_FILE`,
    ///   `FOLIO_TRACE_LEVEL`: optional strings
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use folio_core::Config;
    ///
    /// let mut vars = BTreeMap::new();
    /// vars.insert("FOLIO_HEADING".to_string(), "Hi there".to_string());
    /// vars.insert("FOLIO_FPS".to_string(), "30".to_string());
    ///
    /// let config = Config::from_env(&vars);
    /// assert_eq!(config.heading, "Hi there");
    /// assert_eq!(config.fps, 30);
    /// ```
    #[must_use]
    pub fn from_env(vars: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let heading = vars
            .get("FOLIO_HEADING")
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or(defaults.heading);

        let offset_ms = vars
            .get("FOLIO_OFFSET_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(defaults.offset_ms);

        let delay_ms = vars
            .get("FOLIO_DELAY_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(defaults.delay_ms);

        let fps = vars
            .get("FOLIO_FPS")
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|fps| *fps > 0)
            .unwrap_or(defaults.fps);

        let environment = vars
            .get("FOLIO_ENV")
            .map_or(defaults.environment, |value| Environment::from_flag(value));

        Self {
            heading,
            offset_ms,
            delay_ms,
            fps,
            environment,
            functions_url: vars.get("FOLIO_FUNCTIONS_URL").cloned(),
            theme_name: vars.get("FOLIO_THEME").cloned(),
            theme_file: vars.get("FOLIO_THEME_FILE").cloned(),
            trace_level: vars.get("FOLIO_TRACE_LEVEL").cloned(),
        }
    }

    /// Decoder options derived from the animation settings.
    #[must_use]
    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions {
            offset: Duration::from_millis(self.offset_ms),
            delay: Duration::from_millis(self.delay_ms),
            fps: self.fps,
        }
    }

    /// Resolves the messaging endpoint for this configuration.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        self.functions_url.as_ref().map_or_else(
            || Endpoint::for_environment(self.environment),
            |url| Endpoint::from_base_url(url),
        )
    }
}

/// Initializes the application state from configuration.
///
/// Loads the theme with fallbacks (custom file, then built-in name, then the
/// default dark theme) and constructs the state for the configured heading.
///
/// # Errors
///
/// Returns an error if the decoder options are invalid. A config produced by
/// [`Config::from_env`] cannot trigger this; hand-built configs can.
///
/// # Example
///
/// ```
/// use folio_core::{initialize, Config};
///
/// let state = initialize(&Config::default())?;
/// assert!(!state.decoder.is_complete());
/// # Ok::<(), folio_core::FolioError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(heading = %config.heading, "initializing application state");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(&config.heading, config.decoder_options(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_applies_defaults() {
        let config = Config::from_env(&BTreeMap::new());
        assert_eq!(config.heading, "Say hello");
        assert_eq!(config.offset_ms, 100);
        assert_eq!(config.delay_ms, 300);
        assert_eq!(config.fps, 24);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn from_env_parses_overrides() {
        let mut vars = BTreeMap::new();
        vars.insert("FOLIO_HEADING".to_string(), "Hi".to_string());
        vars.insert("FOLIO_OFFSET_MS".to_string(), "50".to_string());
        vars.insert("FOLIO_ENV".to_string(), "production".to_string());
        vars.insert("FOLIO_TRACE_LEVEL".to_string(), "debug".to_string());

        let config = Config::from_env(&vars);
        assert_eq!(config.heading, "Hi");
        assert_eq!(config.offset_ms, 50);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_values_fall_back() {
        let mut vars = BTreeMap::new();
        vars.insert("FOLIO_OFFSET_MS".to_string(), "fast".to_string());
        vars.insert("FOLIO_FPS".to_string(), "0".to_string());

        let config = Config::from_env(&vars);
        assert_eq!(config.offset_ms, 100);
        assert_eq!(config.fps, 24);
    }

    #[test]
    fn functions_url_overrides_the_environment() {
        let mut vars = BTreeMap::new();
        vars.insert("FOLIO_ENV".to_string(), "production".to_string());
        vars.insert(
            "FOLIO_FUNCTIONS_URL".to_string(),
            "http://localhost:9000".to_string(),
        );

        let config = Config::from_env(&vars);
        assert_eq!(
            config.endpoint().message_url(),
            "http://localhost:9000/functions/sendMessage",
        );
    }

    #[test]
    fn initialize_builds_a_ready_state() {
        let state = initialize(&Config::default()).unwrap();
        assert_eq!(state.theme.name, "dark");
        assert_eq!(state.decoder.phase(), DecoderPhase::Idle);
    }
}
