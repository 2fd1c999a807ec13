//! Configuration loading.
//!
//! All host-tunable settings are centralized here and loaded from a TOML
//! file if present. Any missing or invalid entries fall back to sensible
//! defaults so the book can still open.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::gesture::DEFAULT_MIN_SWIPE_DISTANCE;

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_anon_key() -> String {
    String::new()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_single_page_breakpoint() -> f32 {
    768.0
}

fn default_min_swipe_distance() -> f32 {
    DEFAULT_MIN_SWIPE_DISTANCE
}

fn default_turn_duration_ms() -> u64 {
    1_000
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

/// High-level configuration; deserializable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the entry/upload endpoint.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Bearer token the hosting platform expects on every call.
    #[serde(default = "default_anon_key")]
    pub anon_key: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Viewport width (px) under which the book renders one page at a time.
    #[serde(default = "default_single_page_breakpoint")]
    pub single_page_breakpoint: f32,
    /// Net horizontal drag (px) required for a swipe to turn the page.
    #[serde(default = "default_min_swipe_distance")]
    pub min_swipe_distance: f32,
    /// How long the host's turn animation runs before it reports completion.
    #[serde(default = "default_turn_duration_ms")]
    pub turn_duration_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server_url: default_server_url(),
            anon_key: default_anon_key(),
            request_timeout_secs: default_request_timeout_secs(),
            single_page_breakpoint: default_single_page_breakpoint(),
            min_swipe_distance: default_min_swipe_distance(),
            turn_duration_ms: default_turn_duration_ms(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Load configuration from `path`, falling back to defaults when the file is
/// missing or malformed. Never fails.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(_) => AppConfig::default(),
    }
}

/// Parse TOML configuration contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(err) => {
            warn!("Invalid config file, using defaults: {err}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("");
        assert_eq!(config.min_swipe_distance, 50.0);
        assert_eq!(config.turn_duration_ms, 1_000);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let config = parse_config(
            r#"
            server_url = "https://book.example.test"
            single_page_breakpoint = 600.0
            log_level = "debug"
            "#,
        );
        assert_eq!(config.server_url, "https://book.example.test");
        assert_eq!(config.single_page_breakpoint, 600.0);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.request_timeout_secs, 10, "untouched fields keep defaults");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let config = parse_config("server_url = [not toml");
        assert_eq!(config.server_url, default_server_url());
    }
}
