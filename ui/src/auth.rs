use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use noventa::{Session, TokenStore};

use crate::BrowserStorage;

pub type BrowserSession = Session<BrowserStorage>;

/// Session context shared by every view.
#[derive(Clone, Copy, Debug)]
pub struct Auth {
    session: Signal<BrowserSession>,
}

impl Auth {
    pub fn new(session: Signal<BrowserSession>) -> Self {
        Self { session }
    }

    /// Reads whatever token the browser kept from a previous visit.
    pub fn restore() -> BrowserSession {
        Session::restore(TokenStore::new(
            BrowserStorage::durable(),
            BrowserStorage::session(),
        ))
    }

    pub fn login(&mut self, token: String, remember: bool) {
        self.session.write().start(token, remember);
        info!(remember, "Session started");
    }

    pub fn logout(&mut self) {
        let remembered = self.session.read().remembered();
        self.session.write().end();
        info!(remembered, "Session ended");
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token().map(str::to_string)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_authenticated()
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}
