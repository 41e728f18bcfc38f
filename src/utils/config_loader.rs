use std::path::Path;

use anyhow::{anyhow, Result};
use regex::Regex;
use tracing::debug;

use crate::config::settings::ClientSettings;
use crate::config::validator;

/// Load settings from an optional YAML file.
///
/// A missing path (or `None`) falls back to defaults; a present but
/// unreadable/invalid file is an error. `${VAR}` / `${VAR:default}`
/// placeholders in the file are expanded from the environment first.
pub async fn run(config_path: Option<&str>) -> Result<ClientSettings> {
    let settings = match config_path {
        Some(path) if Path::new(path).exists() => {
            let content = std::fs::read_to_string(path)?;
            let expanded = expand_env_vars(&content);
            serde_yaml::from_str(&expanded)
                .map_err(|e| anyhow!("Invalid config format: {}", e))?
        }
        Some(path) => {
            debug!("config file '{}' not found, using defaults", path);
            ClientSettings::default()
        }
        None => ClientSettings::default(),
    };

    validator::validate_client_settings(&settings)
        .map_err(|errors| anyhow!("invalid settings: {}", errors.join("; ")))?;

    Ok(settings)
}

fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").unwrap();
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
