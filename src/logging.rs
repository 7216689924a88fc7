// ABOUTME: Tracing subscriber setup shared by the server and loader binaries
// ABOUTME: Reads level, output format, and detail toggles from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging built on `tracing-subscriber`
//!
//! | Variable              | Effect                                   |
//! |-----------------------|------------------------------------------|
//! | `RUST_LOG`            | filter directives, default `info`        |
//! | `LOG_FORMAT`          | `json`, `compact`, anything else pretty  |
//! | `LOG_INCLUDE_LOCATION`| add file and line to every event         |
//! | `LOG_INCLUDE_SPANS`   | emit span open/close events              |
//! | `SERVICE_NAME`        | overrides the binary's service name      |

use anyhow::Result;
use liftlog_core::constants::service_names;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Library and framework targets that are too chatty at `info`
const QUIET_TARGETS: &[&str] = &["hyper=warn", "sqlx::query=warn", "tower_http=info"];

/// Workspace crates raised to the configured level when `RUST_LOG` is unset
const OWN_CRATES: &[&str] = &["liftlog_server", "liftlog_intelligence", "liftlog_core"];

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human-readable lines
    #[default]
    Pretty,
    /// Single-line, no target
    Compact,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`; unknown values fall back to pretty
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Subscriber settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
    /// Output encoding
    pub format: LogFormat,
    /// Add file and line numbers
    pub include_location: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Reported in the startup event
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::default(),
            include_location: false,
            include_spans: false,
            service_name: service_names::LIFTLOG_SERVER.into(),
        }
    }
}

impl LoggingConfig {
    /// Settings for the HTTP server
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_for(service_names::LIFTLOG_SERVER)
    }

    /// Settings for the binary named `default_service`
    #[must_use]
    pub fn from_env_for(default_service: &str) -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: LogFormat::from_str_or_default(&env::var("LOG_FORMAT").unwrap_or_default()),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| default_service.into()),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let user_directives = env::var("RUST_LOG").ok();
        let mut filter = EnvFilter::new(user_directives.as_deref().unwrap_or(&self.level));

        let own = OWN_CRATES
            .iter()
            .map(|krate| format!("{krate}={}", self.level));
        let extra: Vec<String> = QUIET_TARGETS
            .iter()
            .map(|d| (*d).to_owned())
            .chain(own.filter(|_| user_directives.is_none()))
            .collect();

        for directive in extra {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
        filter
    }

    /// Install the global subscriber and log a startup event
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(io::stdout)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_span_events(span_events);

        match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init()?,
            LogFormat::Pretty => registry.with(layer).try_init()?,
            LogFormat::Compact => {
                let layer = layer.compact().with_target(false);
                registry.with(layer).try_init()?;
            }
        }

        info!(
            service = %self.service_name,
            version = env!("CARGO_PKG_VERSION"),
            level = %self.level,
            format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Install the server's subscriber from the environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default(" COMPACT "), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default(""), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.service_name, "liftlog-server");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
