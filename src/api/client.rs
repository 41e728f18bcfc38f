use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::settings::ClientSettings;
use crate::content::model::RawCarousel;
use crate::errors::{AuthError, FetchError};
use crate::session::manager::AuthToken;
use crate::utils::constants::{AUTH_PATH, DATA_PATH, DEFAULT_TOKEN_TYPE};

/// Wire shape of the auth endpoint's response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_owned()
}

/// The remote carousel API: one auth endpoint, one data endpoint.
///
/// Holds a single reqwest client built with the configured timeout; no
/// retries live here, a failed call surfaces once.
pub struct ApiClient {
    client: Client,
    base_url: String,
    sub: String,
}

impl ApiClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_owned(),
            sub: settings.auth.sub.clone(),
        })
    }

    /// `POST /v1/mobile/auth` with the configured subject.
    ///
    /// The response must carry a non-empty token; the endpoint has been seen
    /// answering 200 with an empty body on bad subjects.
    pub async fn login(&self) -> Result<LoginResponse, AuthError> {
        let url = format!("{}{}", self.base_url, AUTH_PATH);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "sub": self.sub }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Status(status));
        }

        let login: LoginResponse = response.json().await?;
        if login.token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        Ok(login)
    }

    /// `GET /v1/mobile/data` with bearer credentials.
    ///
    /// The body must be a JSON array; anything else is rejected before any
    /// per-entry decoding happens.
    pub async fn fetch_content(&self, auth: &AuthToken) -> Result<Vec<RawCarousel>, FetchError> {
        let url = format!("{}{}", self.base_url, DATA_PATH);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("{} {}", auth.token_type, auth.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: Value = response.json().await?;
        if !body.is_array() {
            return Err(FetchError::InvalidFormat);
        }

        Ok(serde_json::from_value(body)?)
    }
}
