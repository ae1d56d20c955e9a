//! Owned session container with change subscriptions.
//!
//! Hosts without a reactive runtime (the cli, tests) use this to get the same
//! "state changes, dependents hear about it synchronously" behavior the web
//! client gets from signals. Persistence is attached with
//! [`SessionContainer::persist_with`]; it runs on every change and on every
//! logout, so keys left behind by a partial store are cleared even when the
//! session was already anonymous.

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;

use crate::session::{Credentials, Session, Transition};
use crate::store::{CredentialStore, load_session};

type Listener = Box<dyn FnMut(&Session)>;

/// Handle returned by [`SessionContainer::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// Holds the current [`Session`] and notifies subscribers when it changes.
#[derive(Default)]
pub struct SessionContainer {
    session: Session,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    persist: Option<Listener>,
}

impl SessionContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Seed the session from `store`. Partial store contents seed `Anonymous`.
    pub fn initialize<S: CredentialStore + ?Sized>(&mut self, store: &S) {
        let loaded = load_session(store);
        if loaded != self.session {
            self.session = loaded;
            self.notify();
        }
    }

    pub fn login(&mut self, creds: Credentials) {
        log::info!("login: {} as {}", creds.username(), creds.role());
        if self.session.login(creds) == Transition::Changed {
            self.notify();
        }
    }

    pub fn logout(&mut self) {
        if self.session.logout() == Transition::Changed {
            log::info!("logout");
            self.notify();
        } else if let Some(persist) = &mut self.persist {
            persist(&self.session);
        }
    }

    /// Install the persistence hook, replacing any earlier one.
    ///
    /// Runs before subscribers on every change, and also on a logout that
    /// leaves the session unchanged.
    pub fn persist_with(&mut self, hook: impl FnMut(&Session) + 'static) {
        self.persist = Some(Box::new(hook));
    }

    /// Register `listener`; it runs after every change, in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&Session) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(id, _)| *id != subscription.0);
    }

    fn notify(&mut self) {
        if let Some(persist) = &mut self.persist {
            persist(&self.session);
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.session);
        }
    }
}

impl std::fmt::Debug for SessionContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContainer")
            .field("session", &self.session)
            .field("listeners", &self.listeners.len())
            .field("persisted", &self.persist.is_some())
            .finish_non_exhaustive()
    }
}
