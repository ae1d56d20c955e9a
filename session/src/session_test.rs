use super::*;

fn alice() -> Credentials {
    Credentials::new("tok1", "alice", Role::Technician).expect("valid credentials")
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_require_non_blank_token_and_username() {
    assert!(Credentials::new("", "alice", Role::Admin).is_none());
    assert!(Credentials::new("tok", "  ", Role::Admin).is_none());
    assert!(Credentials::new("tok", "alice", Role::Admin).is_some());
}

#[test]
fn from_parts_rejects_any_missing_field() {
    let t = || Some("tok1".to_owned());
    let u = || Some("alice".to_owned());
    let r = || Some("ROLE_TECHNICIAN".to_owned());

    assert_eq!(Credentials::from_parts(t(), u(), r()), Some(alice()));
    assert_eq!(Credentials::from_parts(None, u(), r()), None);
    assert_eq!(Credentials::from_parts(t(), None, r()), None);
    assert_eq!(Credentials::from_parts(t(), u(), None), None);
}

#[test]
fn from_parts_rejects_unknown_role() {
    let creds = Credentials::from_parts(Some("tok".into()), Some("bob".into()), Some("ROLE_GUEST".into()));
    assert_eq!(creds, None);
}

#[test]
fn debug_output_redacts_token() {
    let rendered = format!("{:?}", alice());
    assert!(!rendered.contains("tok1"));
    assert!(rendered.contains("alice"));
}

// =============================================================
// Session transitions
// =============================================================

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.username(), None);
    assert_eq!(session.role(), None);
}

#[test]
fn login_populates_all_fields() {
    let mut session = Session::default();
    assert_eq!(session.login(alice()), Transition::Changed);
    assert_eq!(session.token(), Some("tok1"));
    assert_eq!(session.username(), Some("alice"));
    assert_eq!(session.role(), Some(Role::Technician));
}

#[test]
fn login_with_same_triple_is_idempotent() {
    let mut session = Session::default();
    session.login(alice());
    assert_eq!(session.login(alice()), Transition::Unchanged);
    assert_eq!(session.credentials(), Some(&alice()));
}

#[test]
fn login_with_different_triple_replaces_session() {
    let mut session = Session::default();
    session.login(alice());
    let admin = Credentials::new("tok2", "root", Role::Admin).unwrap();
    assert_eq!(session.login(admin), Transition::Changed);
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.username(), Some("root"));
}

#[test]
fn logout_clears_all_fields() {
    let mut session = Session::default();
    session.login(alice());
    assert_eq!(session.logout(), Transition::Changed);
    assert_eq!(session, Session::Anonymous);
    assert_eq!(session.logout(), Transition::Unchanged);
}
