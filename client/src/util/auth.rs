//! Shared route-guard UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected view applies identical redirect behavior, driven by the
//! pure `session::check_access` decision.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{GuardDecision, Role};

use crate::state::session::SessionState;

/// Navigation options for a redirect; `replace` keeps the denied view out of history.
pub fn redirect_options(replace: bool) -> NavigateOptions {
    NavigateOptions {
        replace,
        ..NavigateOptions::default()
    }
}

/// Target and history mode when `decision` denies the view.
pub fn redirect_target(decision: GuardDecision) -> Option<(&'static str, bool)> {
    match decision {
        GuardDecision::Render => None,
        GuardDecision::Redirect { to, replace, .. } => Some((to, replace)),
    }
}

/// One guard evaluation: navigate away if the current session is denied.
///
/// Reads the session tracked, so inside an effect it re-runs on change.
pub fn redirect_if_denied<F>(session: SessionState, allowed: &[Role], navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some((to, replace)) = redirect_target(session.check(allowed)) {
        navigate(to, redirect_options(replace));
    }
}

/// Redirect away whenever the session stops satisfying `allowed`.
///
/// Re-runs on every session change, so logging out (or a 401 forcing logout)
/// while a dashboard is open also redirects.
pub fn install_role_redirect<F>(session: SessionState, allowed: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || redirect_if_denied(session, allowed, &navigate));
}
