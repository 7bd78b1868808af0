use crate::storage::KeyValueStore;

/// Durable-area key holding a remembered token.
pub const TOKEN_KEY: &str = "token";
/// Durable-area marker set while the token is remembered.
pub const REMEMBER_KEY: &str = "remember_me";
/// Session-area key holding a token that dies with the tab.
pub const SESSION_TOKEN_KEY: &str = "token_session";

/// Persists the authentication token in exactly one of two storage areas.
///
/// `remember = true` keeps the token in the durable area, otherwise it goes
/// to the session-scoped area. Writing to one area always clears the other.
#[derive(Debug, Clone)]
pub struct TokenStore<S> {
    durable: S,
    session: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(durable: S, session: S) -> Self {
        Self { durable, session }
    }

    pub fn set_token(&self, token: &str, remember: bool) {
        if remember {
            self.durable.set(TOKEN_KEY, token);
            self.durable.set(REMEMBER_KEY, "1");
            self.session.remove(SESSION_TOKEN_KEY);
        } else {
            self.session.set(SESSION_TOKEN_KEY, token);
            self.durable.remove(TOKEN_KEY);
            self.durable.remove(REMEMBER_KEY);
        }
    }

    /// The session-scoped token wins over the durable one. Empty values
    /// count as absent.
    pub fn get_token(&self) -> Option<String> {
        self.session
            .get(SESSION_TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .or_else(|| self.durable.get(TOKEN_KEY).filter(|t| !t.is_empty()))
    }

    pub fn clear_token(&self) {
        self.durable.remove(TOKEN_KEY);
        self.durable.remove(REMEMBER_KEY);
        self.session.remove(SESSION_TOKEN_KEY);
    }

    pub fn is_remembered(&self) -> bool {
        self.durable.get(REMEMBER_KEY).as_deref() == Some("1")
    }
}
