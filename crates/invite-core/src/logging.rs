//! Tracing subscriber setup shared by the desktop app and the CLI.
//!
//! ## Usage
//!
//! ```ignore
//! use invite_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("info")
//!     .with_filter("invite_core=debug")
//!     .init()?;
//! ```
//!
//! `RUST_LOG` always wins over the configured level. With the `json-logs`
//! feature (or `.json(true)`) events are written as JSON lines:
//!
//! ```bash
//! RUST_LOG=invite_core=debug wedding-invite-desktop 2>&1 | jq 'select(.level == "WARN")'
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{InviteError, InviteResult};

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    default_level: String,
    extra_directives: Vec<String>,
    json: bool,
}

impl LoggingBuilder {
    /// `default_level` applies when `RUST_LOG` is unset (e.g. "info").
    pub fn new(default_level: impl Into<String>) -> Self {
        Self {
            default_level: default_level.into(),
            extra_directives: Vec::new(),
            json: cfg!(feature = "json-logs"),
        }
    }

    /// Add a filter directive (e.g. "invite_core=debug").
    pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
        self.extra_directives.push(directive.into());
        self
    }

    /// Emit JSON lines instead of human-readable output.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Filter from `RUST_LOG`, or from the configured level and directives.
    pub fn build_filter(&self) -> InviteResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        self.configured_filter()
    }

    fn configured_filter(&self) -> InviteResult<EnvFilter> {
        let mut directives = vec![self.default_level.clone()];
        directives.extend(self.extra_directives.iter().cloned());
        EnvFilter::try_new(directives.join(","))
            .map_err(|e| InviteError::Logging(format!("invalid log filter: {e}")))
    }

    /// Install as the global subscriber. Events go to stderr.
    ///
    /// Fails if a global subscriber is already set.
    pub fn init(self) -> InviteResult<()> {
        let filter = self.build_filter()?;
        let registry = tracing_subscriber::registry().with(filter);

        let result = if self.json {
            registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()
        };

        result.map_err(|e| InviteError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_accepts_directives() {
        let builder = LoggingBuilder::new("warn").with_filter("invite_core=debug");
        let filter = builder.configured_filter().unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("warn"));
        assert!(rendered.contains("invite_core=debug"));
    }

    #[test]
    fn test_invalid_directive_is_logging_error() {
        let builder = LoggingBuilder::new("info").with_filter("invite_core=notalevel");
        assert!(matches!(
            builder.configured_filter(),
            Err(InviteError::Logging(_))
        ));
    }

    #[test]
    fn test_second_init_fails() {
        let _ = LoggingBuilder::new("info").init();
        assert!(matches!(
            LoggingBuilder::new("info").init(),
            Err(InviteError::Logging(_))
        ));
    }
}
