use crate::utils::constants::DEFAULT_TOKEN_TYPE;

/// The in-memory credential slot: current token value plus its scheme.
///
/// An owned value, not a global. The session manager holds the only handle
/// and injects reads/writes through it, so tests never share token state.
/// Nothing is persisted; a process restart starts logged out.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: Option<String>,
    token_type: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&mut self, token: String, token_type: String) {
        self.token = Some(token);
        self.token_type = Some(token_type);
    }

    /// Reset to the logged-out state (`Bearer` type, no token).
    pub fn clear(&mut self) {
        self.token = None;
        self.token_type = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn token_type(&self) -> &str {
        self.token_type.as_deref().unwrap_or(DEFAULT_TOKEN_TYPE)
    }

    /// Authenticated means exactly "a token is present".
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
