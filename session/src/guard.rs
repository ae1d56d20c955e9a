//! Route guard: may this session render a view restricted to some roles?

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::role::Role;
use crate::routes::LOGIN_PATH;
use crate::session::Session;

/// Why a guard check failed. Logged, never shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// No session at all.
    Unauthenticated,
    /// The route's allow-list is empty; nobody may enter.
    NobodyAllowed,
    /// Authenticated, but the role is not on the allow-list.
    RoleNotAllowed(Role),
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Navigate to `to`, replacing the current history entry when `replace`.
    Redirect { to: &'static str, replace: bool, reason: Denial },
}

impl GuardDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Decide whether `session` may render a view open to `allowed`.
///
/// An empty `allowed` always redirects, even for an authenticated session.
#[must_use]
pub fn check_access(session: &Session, allowed: &[Role]) -> GuardDecision {
    let reason = match session.role() {
        None => Denial::Unauthenticated,
        Some(_) if allowed.is_empty() => Denial::NobodyAllowed,
        Some(role) if allowed.contains(&role) => return GuardDecision::Render,
        Some(role) => Denial::RoleNotAllowed(role),
    };
    log::debug!("guard denied: {reason:?}");
    GuardDecision::Redirect { to: LOGIN_PATH, replace: true, reason }
}
