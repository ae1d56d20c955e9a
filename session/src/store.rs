//! Persisted credential store abstraction and the session persistence adapter.
//!
//! DESIGN
//! ======
//! The store is a dumb string key-value map. All session policy (the three
//! keys move together, a partial triple means anonymous) lives in the free
//! functions below, so every backend gets it for free.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::session::{Credentials, Session};

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "role";

/// Durable string key-value storage that survives reloads.
///
/// Backends are best-effort: a write that fails is dropped, matching how
/// browser storage behaves when quota or privacy settings intervene.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Rehydrate a session from `store`.
///
/// Any missing, blank, or unparseable field yields [`Session::Anonymous`].
pub fn load_session<S: CredentialStore + ?Sized>(store: &S) -> Session {
    let token = store.get(TOKEN_KEY);
    let username = store.get(USERNAME_KEY);
    let role = store.get(ROLE_KEY);
    let any_present = token.is_some() || username.is_some() || role.is_some();
    match Credentials::from_parts(token, username, role) {
        Some(creds) => {
            log::debug!("restored session for {} ({})", creds.username(), creds.role());
            Session::Authenticated(creds)
        }
        None => {
            if any_present {
                log::warn!("ignoring partial credentials in store");
            }
            Session::Anonymous
        }
    }
}

/// Write all three keys for `creds`.
pub fn persist_session<S: CredentialStore + ?Sized>(store: &mut S, creds: &Credentials) {
    store.set(TOKEN_KEY, creds.token());
    store.set(USERNAME_KEY, creds.username());
    store.set(ROLE_KEY, creds.role().as_str());
}

/// Remove all three keys.
pub fn clear_session<S: CredentialStore + ?Sized>(store: &mut S) {
    store.remove(TOKEN_KEY);
    store.remove(USERNAME_KEY);
    store.remove(ROLE_KEY);
}

/// Mirror `session` into `store`: persist when authenticated, clear otherwise.
///
/// This is the on-change hook hosts attach to their session container.
pub fn sync_store<S: CredentialStore + ?Sized>(store: &mut S, session: &Session) {
    match session {
        Session::Authenticated(creds) => persist_session(store, creds),
        Session::Anonymous => clear_session(store),
    }
}
