use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use session::{Credentials, Denial, Session, check_access};

#[test]
fn render_has_no_redirect_target() {
    assert_eq!(redirect_target(GuardDecision::Render), None);
}

#[test]
fn anonymous_session_redirects_to_login_with_replace() {
    let decision = check_access(&Session::Anonymous, &[Role::Homeowner]);
    assert_eq!(redirect_target(decision), Some(("/login", true)));
}

#[test]
fn wrong_role_redirects_to_login() {
    let mut session = Session::Anonymous;
    session.login(Credentials::new("t", "bob", Role::Homeowner).unwrap());
    let decision = check_access(&session, &[Role::Admin]);
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            to: "/login",
            replace: true,
            reason: Denial::RoleNotAllowed(Role::Homeowner)
        }
    );
    assert_eq!(redirect_target(decision), Some(("/login", true)));
}

#[test]
fn redirect_options_sets_replace_only() {
    assert!(redirect_options(true).replace);
    assert!(!redirect_options(false).replace);
    assert_eq!(redirect_options(true).scroll, NavigateOptions::default().scroll);
}

fn ignore_change(_: &Session) {}

#[test]
fn guard_navigates_only_once_the_session_is_denied() {
    Owner::new().with(|| {
        let session = SessionState::new(Session::Anonymous, ignore_change);
        let visits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visits);
        let navigate = move |to: &str, options: NavigateOptions| sink.borrow_mut().push((to.to_owned(), options.replace));
        let allowed = [Role::Technician];

        session.login(Credentials::new("t", "tess", Role::Technician).unwrap());
        redirect_if_denied(session, &allowed, &navigate);
        assert!(visits.borrow().is_empty());

        session.logout();
        redirect_if_denied(session, &allowed, &navigate);
        assert_eq!(*visits.borrow(), vec![("/login".to_owned(), true)]);
    });
}

#[test]
fn guard_with_empty_allow_list_always_navigates() {
    Owner::new().with(|| {
        let session = SessionState::new(Session::Anonymous, ignore_change);
        session.login(Credentials::new("t", "root", Role::Admin).unwrap());
        let visits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visits);
        let navigate = move |to: &str, options: NavigateOptions| sink.borrow_mut().push((to.to_owned(), options.replace));

        redirect_if_denied(session, &[], &navigate);
        assert_eq!(*visits.borrow(), vec![("/login".to_owned(), true)]);
    });
}
