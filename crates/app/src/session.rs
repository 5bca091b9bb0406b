use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{token_subject, Rol, Session};

use crate::cache;
use crate::storage;

/// localStorage keys, unchanged from what the backend's other clients use.
const TOKEN_KEY: &str = "token";
const ROL_KEY: &str = "rol";

/// Global session state: the bearer token and the role the backend issued
/// with it. Provided once via context; pages read it through [`use_session`]
/// and re-render reactively through the signals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub token: Signal<Option<String>>,
    pub rol: Signal<Option<String>>,
}

impl SessionState {
    /// Restore a previous session from durable storage, so a page reload
    /// keeps the user signed in.
    pub fn restore() -> Self {
        Self {
            token: Signal::new(storage::local_get(TOKEN_KEY)),
            rol: Signal::new(storage::local_get(ROL_KEY)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Persist and publish a fresh login.
    pub fn login(&mut self, token: String, rol: String) {
        storage::local_set(TOKEN_KEY, &token);
        storage::local_set(ROL_KEY, &rol);
        self.token.set(Some(token));
        self.rol.set(Some(rol));
    }

    /// Clear the session and every session-scoped cache.
    pub fn logout(&mut self) {
        storage::local_delete(TOKEN_KEY);
        storage::local_delete(ROL_KEY);
        cache::clear();
        self.token.set(None);
        self.rol.set(None);
    }

    pub fn rol_parsed(&self) -> Option<Rol> {
        self.rol.read().as_deref().and_then(Rol::parse)
    }

    /// A plain-value copy of the current session, for code that should not
    /// hold signals (the API client, log context).
    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token.read().clone(),
            rol: self.rol.read().clone(),
        }
    }

    /// The signed-in email, read from the token's `sub` claim.
    pub fn email(&self) -> Option<String> {
        self.token.read().as_deref().and_then(token_subject)
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// A REST client carrying the current token.
pub fn use_api() -> ApiClient {
    let session = use_session();
    ApiClient::new(session.snapshot().token)
}
