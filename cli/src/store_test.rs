use super::*;
use session::{Credentials, Role, Session, SessionContainer, load_session, sync_store};

fn temp_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("wt-store-{}", uuid::Uuid::new_v4()))
        .join("session.json")
}

#[test]
fn open_missing_file_is_empty() {
    let store = FileCredentialStore::open(temp_path());
    assert_eq!(store.get("token"), None);
    assert_eq!(load_session(&store), Session::Anonymous);
}

#[test]
fn set_creates_parent_dirs_and_persists() {
    let path = temp_path();
    let mut store = FileCredentialStore::open(&path);
    store.set("token", "tok1");

    let reopened = FileCredentialStore::open(&path);
    assert_eq!(reopened.get("token"), Some("tok1".to_owned()));

    store.remove("token");
    assert!(!path.exists());
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let path = temp_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{not json").unwrap();
    let store = FileCredentialStore::open(&path);
    assert_eq!(load_session(&store), Session::Anonymous);
}

#[test]
fn session_survives_reload_and_logout_deletes_file() {
    let path = temp_path();
    let mut container = SessionContainer::new();
    let mut store = FileCredentialStore::open(&path);
    container.persist_with(move |s| sync_store(&mut store, s));

    container.login(Credentials::new("tok1", "alice", Role::Technician).unwrap());
    let reloaded = load_session(&FileCredentialStore::open(&path));
    assert_eq!(reloaded.token(), Some("tok1"));
    assert_eq!(reloaded.username(), Some("alice"));
    assert_eq!(reloaded.role(), Some(Role::Technician));

    container.logout();
    assert!(!path.exists());
}

#[test]
fn logout_removes_file_left_with_partial_credentials() {
    let path = temp_path();
    let mut seeded = FileCredentialStore::open(&path);
    seeded.set("token", "stale");
    seeded.set("username", "alice");

    let mut container = SessionContainer::new();
    let mut store = FileCredentialStore::open(&path);
    container.initialize(&store);
    assert_eq!(container.session(), &Session::Anonymous);
    container.persist_with(move |s| sync_store(&mut store, s));

    container.logout();
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn credential_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt as _;

    let path = temp_path();
    let mut store = FileCredentialStore::open(&path);
    store.set("token", "secret");
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
