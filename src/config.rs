//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so values are baked in
//! through `option_env!` when the bundle is compiled. Parsing is split into
//! pure helpers so defaults can be tested without touching the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the subscription service, without a trailing slash.
    pub api_base_url: String,
    /// Browser console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `BOOKSHELF_API_BASE_URL`: default `http://localhost:5000`
    /// - `BOOKSHELF_LOG_LEVEL`: default `info`
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("BOOKSHELF_API_BASE_URL"), option_env!("BOOKSHELF_LOG_LEVEL"))
    }

    fn from_raw(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self { api_base_url: parse_base_url(api_base_url), log_level: parse_log_level(log_level) }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None, None)
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

fn parse_log_level(raw: Option<&str>) -> String {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        Some(level) if matches!(level.as_str(), "error" | "warn" | "info" | "debug" | "trace") => level,
        _ => DEFAULT_LOG_LEVEL.to_owned(),
    }
}
