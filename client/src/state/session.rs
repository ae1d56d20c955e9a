//! Reactive session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` through context. Route guards, the nav bar, and the
//! dashboards read it; only the login page and logout actions write it.
//!
//! DESIGN
//! ======
//! Mutations apply the pure `session::Session` transitions and then call the
//! `on_change` hook with the new value. The hook is where persistence lives
//! (`localStorage` in the browser), so this type never touches storage itself.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use session::{Credentials, GuardDecision, Role, Session, Transition, check_access};

/// Called with the new session after every change, and on every logout.
pub type SessionHook = fn(&Session);

#[derive(Clone, Copy)]
pub struct SessionState {
    session: RwSignal<Session>,
    on_change: SessionHook,
}

impl SessionState {
    pub fn new(initial: Session, on_change: SessionHook) -> Self {
        Self {
            session: RwSignal::new(initial),
            on_change,
        }
    }

    /// Current session, tracked.
    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(Session::role)
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.username().map(str::to_owned))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn role_untracked(&self) -> Option<Role> {
        self.session.with_untracked(Session::role)
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Guard decision for `allowed`, tracked so callers re-evaluate on change.
    pub fn check(&self, allowed: &[Role]) -> GuardDecision {
        self.session.with(|s| check_access(s, allowed))
    }

    pub fn login(&self, creds: Credentials) {
        let mut next = self.session.get_untracked();
        if next.login(creds) == Transition::Changed {
            self.commit(next);
        }
    }

    /// End the session. The hook runs even when already anonymous so that
    /// storage left with a partial credential triple is cleared too.
    pub fn logout(&self) {
        let mut next = self.session.get_untracked();
        if next.logout() == Transition::Changed {
            self.commit(next);
        } else {
            (self.on_change)(&next);
        }
    }

    fn commit(&self, next: Session) {
        (self.on_change)(&next);
        self.session.set(next);
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("session", &self.session.get_untracked())
            .finish_non_exhaustive()
    }
}
