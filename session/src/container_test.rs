use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::role::Role;
use crate::store::{MemoryStore, ROLE_KEY, TOKEN_KEY, USERNAME_KEY, sync_store};

fn creds(role: Role) -> Credentials {
    Credentials::new("tok1", "alice", role).unwrap()
}

/// Container wired to a shared store the way hosts wire persistence.
fn persisted_container() -> (SessionContainer, Rc<RefCell<MemoryStore>>) {
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let mut container = SessionContainer::new();
    let hook_store = Rc::clone(&store);
    container.persist_with(move |session| sync_store(&mut *hook_store.borrow_mut(), session));
    (container, store)
}

#[test]
fn new_container_is_anonymous() {
    assert_eq!(SessionContainer::new().session(), &Session::Anonymous);
}

#[test]
fn login_notifies_subscribers_once() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut container = SessionContainer::new();
    let sink = Rc::clone(&seen);
    container.subscribe(move |s| sink.borrow_mut().push(s.role()));

    container.login(creds(Role::Homeowner));
    container.login(creds(Role::Homeowner));

    assert_eq!(*seen.borrow(), vec![Some(Role::Homeowner)]);
}

#[test]
fn logout_notifies_only_when_authenticated() {
    let count = Rc::new(RefCell::new(0));
    let mut container = SessionContainer::new();
    let sink = Rc::clone(&count);
    container.subscribe(move |_| *sink.borrow_mut() += 1);

    container.logout();
    assert_eq!(*count.borrow(), 0);
    container.login(creds(Role::Admin));
    container.logout();
    assert_eq!(*count.borrow(), 2);
    assert_eq!(container.session(), &Session::Anonymous);
}

#[test]
fn unsubscribe_stops_notifications() {
    let count = Rc::new(RefCell::new(0));
    let mut container = SessionContainer::new();
    let sink = Rc::clone(&count);
    let sub = container.subscribe(move |_| *sink.borrow_mut() += 1);
    container.unsubscribe(sub);
    container.login(creds(Role::Admin));
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn persistence_hook_writes_and_clears_all_keys() {
    let (mut container, store) = persisted_container();

    container.login(creds(Role::Technician));
    {
        let store = store.borrow();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok1"));
        assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("alice"));
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("ROLE_TECHNICIAN"));
    }

    container.logout();
    assert!(store.borrow().is_empty());
}

#[test]
fn login_then_reload_reproduces_triple() {
    for role in Role::ALL {
        let (mut container, store) = persisted_container();
        container.login(creds(role));

        let mut reloaded = SessionContainer::new();
        reloaded.initialize(&*store.borrow());
        assert_eq!(reloaded.session().token(), Some("tok1"));
        assert_eq!(reloaded.session().username(), Some("alice"));
        assert_eq!(reloaded.session().role(), Some(role));
    }
}

#[test]
fn initialize_from_partial_store_stays_anonymous() {
    let mut store = MemoryStore::new();
    store.set(TOKEN_KEY, "tok1");
    store.set(ROLE_KEY, "ROLE_ADMIN");
    let mut container = SessionContainer::new();
    container.initialize(&store);
    assert_eq!(container.session(), &Session::Anonymous);
}

#[test]
fn logout_clears_partial_store_without_notifying_subscribers() {
    let (mut container, store) = persisted_container();
    store.borrow_mut().set(TOKEN_KEY, "stale");
    store.borrow_mut().set(USERNAME_KEY, "alice");
    container.initialize(&*store.borrow());
    assert_eq!(container.session(), &Session::Anonymous);

    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    container.subscribe(move |_| *sink.borrow_mut() += 1);

    container.logout();
    assert_eq!(store.borrow().get(TOKEN_KEY), None);
    assert_eq!(store.borrow().get(USERNAME_KEY), None);
    assert!(store.borrow().is_empty());
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn initialize_notifies_when_store_seeds_a_session() {
    let mut store = MemoryStore::new();
    crate::store::persist_session(&mut store, &creds(Role::Admin));

    let count = Rc::new(RefCell::new(0));
    let mut container = SessionContainer::new();
    let sink = Rc::clone(&count);
    container.subscribe(move |_| *sink.borrow_mut() += 1);
    container.initialize(&store);
    container.initialize(&store);
    assert_eq!(*count.borrow(), 1);
}
