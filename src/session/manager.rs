use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::api::client::ApiClient;
use crate::errors::AuthError;
use crate::session::store::SessionStore;
use crate::token::expiry::should_refresh_token;

/// Credentials handed to a protected call: the raw token plus its scheme,
/// ready for an `Authorization: {token_type} {token}` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
    pub token_type: String,
}

/// Owns the session slot and keeps a valid token in it.
///
/// Two states: unauthenticated (empty slot) and authenticated. Login fills
/// the slot; a refresh clears it first and then performs the same login; a
/// failed refresh leaves the session logged out rather than holding a token
/// that is about to die.
pub struct SessionManager {
    client: Arc<ApiClient>,
    session: Mutex<SessionStore>,
}

impl SessionManager {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            session: Mutex::new(SessionStore::new()),
        }
    }

    /// Return a token that is good for at least the refresh buffer, logging
    /// in or refreshing first when needed.
    ///
    /// The session lock is held across the login await, so concurrent
    /// callers cannot double-login: the second caller blocks on the guard
    /// and then finds the token the first one stored.
    pub async fn ensure_valid_token(&self) -> Result<AuthToken, AuthError> {
        let mut session = self.session.lock().await;

        match session.token().map(str::to_owned) {
            Some(token) if !should_refresh_token(&token) => {
                return Ok(AuthToken {
                    token,
                    token_type: session.token_type().to_owned(),
                });
            }
            Some(_) => {
                // refresh = clear first, then the same call as login
                info!("token near expiry, refreshing");
                session.clear();
            }
            None => {
                info!("no session token, logging in");
            }
        }

        let login = self.client.login().await.inspect_err(|e| {
            // session stays cleared: failing to logged-out, never stale
            warn!("login failed: {}", e);
        })?;

        session.set_token(login.token.clone(), login.token_type.clone());
        info!("session authenticated, token type '{}'", login.token_type);

        Ok(AuthToken {
            token: login.token,
            token_type: login.token_type,
        })
    }

    /// Drop the current credentials.
    pub async fn logout(&self) {
        self.session.lock().await.clear();
        info!("session cleared");
    }

    pub async fn clear_token(&self) {
        self.session.lock().await.clear();
    }

    pub async fn set_token(&self, token: String, token_type: String) {
        self.session.lock().await.set_token(token, token_type);
    }

    pub async fn token(&self) -> Option<String> {
        self.session.lock().await.token().map(str::to_owned)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.is_authenticated()
    }
}
