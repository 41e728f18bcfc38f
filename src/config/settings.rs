use serde::Deserialize;

use crate::utils::constants::{DEFAULT_AUTH_SUBJECT, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_MS};

/// ================================
/// Client-wide settings
/// ================================
///
/// Transport and identity plumbing only. The refresh buffer and cache
/// duration are deliberately constants, not settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout applied to every call, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub auth: AuthSettings,
    pub logging: Option<LoggingConfig>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            auth: AuthSettings::default(),
            logging: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    /// Subject sent in the login body.
    #[serde(default = "default_auth_subject")]
    pub sub: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            sub: default_auth_subject(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

fn default_auth_subject() -> String {
    DEFAULT_AUTH_SUBJECT.to_owned()
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}
