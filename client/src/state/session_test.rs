use std::cell::RefCell;

use super::*;
use session::{CredentialStore, MemoryStore, load_session, sync_store};

thread_local! {
    static STORE: RefCell<MemoryStore> = RefCell::new(MemoryStore::new());
    static CHANGES: RefCell<usize> = const { RefCell::new(0) };
}

fn recording_hook(session: &Session) {
    STORE.with(|store| sync_store(&mut *store.borrow_mut(), session));
    CHANGES.with(|n| *n.borrow_mut() += 1);
}

fn reset() {
    STORE.with(|store| *store.borrow_mut() = MemoryStore::new());
    CHANGES.with(|n| *n.borrow_mut() = 0);
}

fn changes() -> usize {
    CHANGES.with(|n| *n.borrow())
}

fn alice() -> Credentials {
    Credentials::new("tok1", "alice", Role::Technician).unwrap()
}

#[test]
fn login_updates_signal_and_store() {
    reset();
    Owner::new().with(|| {
        let state = SessionState::new(Session::Anonymous, recording_hook);
        state.login(alice());

        assert_eq!(state.role_untracked(), Some(Role::Technician));
        assert_eq!(state.token_untracked().as_deref(), Some("tok1"));
        STORE.with(|store| {
            let store = store.borrow();
            assert_eq!(store.get("token").as_deref(), Some("tok1"));
            assert_eq!(store.get("username").as_deref(), Some("alice"));
            assert_eq!(store.get("role").as_deref(), Some("ROLE_TECHNICIAN"));
        });
    });
}

#[test]
fn repeated_login_does_not_fire_hook_again() {
    reset();
    Owner::new().with(|| {
        let state = SessionState::new(Session::Anonymous, recording_hook);
        state.login(alice());
        state.login(alice());
        assert_eq!(changes(), 1);
    });
}

#[test]
fn logout_clears_signal_and_store() {
    reset();
    Owner::new().with(|| {
        let state = SessionState::new(Session::Anonymous, recording_hook);
        state.login(alice());
        state.logout();
        assert_eq!(state.role_untracked(), None);
        assert_eq!(state.token_untracked(), None);
        STORE.with(|store| assert!(store.borrow().is_empty()));
        state.logout();
        assert_eq!(changes(), 3);
    });
}

#[test]
fn logout_while_anonymous_clears_partial_store() {
    reset();
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        store.set("token", "stale");
        store.set("username", "alice");
    });
    Owner::new().with(|| {
        let restored = STORE.with(|store| load_session(&*store.borrow()));
        assert_eq!(restored, Session::Anonymous);
        let state = SessionState::new(restored, recording_hook);

        state.logout();
        assert_eq!(state.role_untracked(), None);
        STORE.with(|store| {
            let store = store.borrow();
            assert_eq!(store.get("token"), None);
            assert_eq!(store.get("username"), None);
        });
    });
}

#[test]
fn reload_from_store_reproduces_session() {
    reset();
    Owner::new().with(|| {
        let state = SessionState::new(Session::Anonymous, recording_hook);
        state.login(alice());

        let restored = STORE.with(|store| load_session(&*store.borrow()));
        let reloaded = SessionState::new(restored, recording_hook);
        assert_eq!(reloaded.role_untracked(), Some(Role::Technician));
        assert_eq!(reloaded.token_untracked().as_deref(), Some("tok1"));
    });
}

#[test]
fn check_follows_session_changes() {
    reset();
    Owner::new().with(|| {
        let state = SessionState::new(Session::Anonymous, recording_hook);
        assert!(!state.check(&[Role::Technician]).is_allowed());
        state.login(alice());
        assert!(state.check(&[Role::Technician]).is_allowed());
        assert!(!state.check(&[Role::Admin]).is_allowed());
        assert!(!state.check(&[]).is_allowed());
        state.logout();
        assert!(!state.check(&[Role::Technician]).is_allowed());
    });
}
