//! Session state and the guard protected views run on mount.

use url::form_urlencoded;

use crate::storage::KeyValueStore;
use crate::token::TokenStore;

/// Path of the login/register view.
pub const AUTH_PATH: &str = "/auth";
/// Where a fresh session lands when no return path was given.
pub const HOME_PATH: &str = "/products";

/// The current user's session, backed by a [`TokenStore`].
///
/// Built explicitly and handed to whoever needs it, so every test or UI
/// context owns an isolated session.
#[derive(Debug, Clone)]
pub struct Session<S> {
    tokens: TokenStore<S>,
    token: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    /// Hydrates the session from whatever token storage holds.
    pub fn restore(tokens: TokenStore<S>) -> Self {
        let token = tokens.get_token();
        Self { tokens, token }
    }

    pub fn start(&mut self, token: String, remember: bool) {
        self.tokens.set_token(&token, remember);
        self.token = Some(token);
    }

    pub fn end(&mut self) {
        self.tokens.clear_token();
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn remembered(&self) -> bool {
        self.tokens.is_remembered()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unchecked,
    Authorized,
    Unauthorized,
}

/// Navigation to the auth view, optionally carrying the path to return to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub next: Option<String>,
}

impl Redirect {
    pub fn target(&self) -> String {
        match &self.next {
            Some(next) => {
                let encoded: String = form_urlencoded::byte_serialize(next.as_bytes()).collect();
                format!("{AUTH_PATH}?next={encoded}")
            }
            None => AUTH_PATH.to_string(),
        }
    }
}

/// One-shot authorization check for a mounted view.
///
/// Starts `Unchecked`; the first [`SessionGuard::check`] moves it to
/// `Authorized` or `Unauthorized`, and both are final for the lifetime of
/// the view.
#[derive(Debug, Clone, Default)]
pub struct SessionGuard {
    state: GuardState,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Returns a redirect only on the transition to `Unauthorized`.
    pub fn check(&mut self, has_token: bool, current_path: Option<&str>) -> Option<Redirect> {
        if self.state != GuardState::Unchecked {
            return None;
        }

        if has_token {
            self.state = GuardState::Authorized;
            None
        } else {
            self.state = GuardState::Unauthorized;
            Some(Redirect {
                next: current_path
                    .filter(|path| !path.is_empty() && !path.starts_with(AUTH_PATH))
                    .map(str::to_string),
            })
        }
    }

    /// Protected content may only render once authorized.
    pub fn can_render(&self) -> bool {
        self.state == GuardState::Authorized
    }
}

/// Where to go after logging in. Only same-site absolute paths are honoured.
pub fn post_login_path(next: &str) -> &str {
    if next.starts_with('/') && !next.starts_with("//") && !next.starts_with(AUTH_PATH) {
        next
    } else {
        HOME_PATH
    }
}
