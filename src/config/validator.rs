//! Settings validation with aggregated errors: every problem in the file is
//! reported in one pass instead of failing on the first.

use tracing::{error, info};

use crate::config::settings::ClientSettings;

const ALLOWED_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_client_settings(cfg: &ClientSettings) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.base_url.is_empty() {
        errors.push("settings: 'base_url' is empty".to_string());
    } else if !cfg.base_url.starts_with("http://") && !cfg.base_url.starts_with("https://") {
        errors.push(format!(
            "settings: 'base_url' must start with http:// or https://, got '{}'",
            cfg.base_url
        ));
    }

    if cfg.timeout_ms == 0 {
        errors.push("settings: 'timeout_ms' must be greater than 0".to_string());
    }

    if cfg.auth.sub.is_empty() {
        errors.push("settings: 'auth.sub' is empty".to_string());
    }

    if let Some(logging) = &cfg.logging {
        if !ALLOWED_LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings: logging.level '{}' is not one of {:?}",
                logging.level, ALLOWED_LOG_LEVELS
            ));
        }
    }

    if errors.is_empty() {
        info!("settings validated");
        Ok(())
    } else {
        for e in &errors {
            error!("{}", e);
        }
        Err(errors)
    }
}
