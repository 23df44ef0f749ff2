//! Configuration constants and utilities for sentiline
//!
//! Each setting is resolved command line first, then environment variable,
//! then the default below.

use crate::cmd_args::CommandLineArgs;
use anyhow::{Context, Result};
use reqwest::Url;
use std::path::PathBuf;

/// Default sentiment endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/sentiment";

/// Environment variable name for overriding the endpoint
pub const ENDPOINT_ENV_VAR: &str = "SENTILINE_ENDPOINT";

/// Default log level filter
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable name for overriding the log level
pub const LOG_LEVEL_ENV_VAR: &str = "SENTILINE_LOG_LEVEL";

/// Default log file path for interactive mode
pub const DEFAULT_LOG_PATH: &str = "~/.sentiline/sentiline.log";

/// Environment variable name for overriding the log file path
pub const LOG_PATH_ENV_VAR: &str = "SENTILINE_LOG_PATH";

fn env_or(var: &str, default: &str) -> String {
    std::env::var_os(var)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Get the endpoint, checking environment variable first, then falling back to default
pub fn get_endpoint() -> String {
    env_or(ENDPOINT_ENV_VAR, DEFAULT_ENDPOINT)
}

/// Get the log level, checking environment variable first, then falling back to default
pub fn get_log_level() -> String {
    env_or(LOG_LEVEL_ENV_VAR, DEFAULT_LOG_LEVEL)
}

/// Get the log file path, checking environment variable first, then falling back to default
pub fn get_log_path() -> String {
    env_or(LOG_PATH_ENV_VAR, DEFAULT_LOG_PATH)
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: Url,
    pub log_level: String,
    pub log_path: PathBuf,
}

impl Settings {
    /// Resolve settings from command line arguments and the environment
    pub fn resolve(args: &CommandLineArgs) -> Result<Self> {
        let endpoint = args.endpoint().cloned().unwrap_or_else(get_endpoint);
        let log_level = args.log_level().cloned().unwrap_or_else(get_log_level);
        let log_path = args.log_file().cloned().unwrap_or_else(get_log_path);

        Self::new(&endpoint, log_level, &log_path)
    }

    /// Build settings from raw values
    pub fn new(endpoint: &str, log_level: String, log_path: &str) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL '{endpoint}'"))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!("Invalid endpoint URL '{endpoint}': scheme must be http or https");
        }
        let log_path = PathBuf::from(shellexpand::tilde(log_path).into_owned());

        Ok(Self {
            endpoint,
            log_level,
            log_path,
        })
    }

    /// Scheme, host and port of the endpoint, used in user-facing messages
    pub fn backend_base(&self) -> String {
        backend_base(&self.endpoint)
    }
}

/// Scheme, host and port of a URL, without path or trailing slash
pub fn backend_base(url: &Url) -> String {
    url.origin().ascii_serialization()
}
