//! Route table, role router, and whole-navigation resolution.
//!
//! `resolve_navigation` answers "what happens if this session opens this
//! path" without a browser, which is what the web router does piecewise.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::guard::{GuardDecision, check_access};
use crate::role::Role;
use crate::session::Session;

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const HOMEOWNER_DASHBOARD_PATH: &str = "/dashboard/homeowner";
pub const TECHNICIAN_DASHBOARD_PATH: &str = "/dashboard/technician";
pub const ADMIN_DASHBOARD_PATH: &str = "/dashboard/admin";

/// Every view the application knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    Signup,
    /// Generic entry point that forwards to the role's dashboard.
    Dashboard,
    HomeownerDashboard,
    TechnicianDashboard,
    AdminDashboard,
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Landing,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Dashboard,
        AppRoute::HomeownerDashboard,
        AppRoute::TechnicianDashboard,
        AppRoute::AdminDashboard,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => LANDING_PATH,
            Self::Login => LOGIN_PATH,
            Self::Signup => SIGNUP_PATH,
            Self::Dashboard => DASHBOARD_PATH,
            Self::HomeownerDashboard => HOMEOWNER_DASHBOARD_PATH,
            Self::TechnicianDashboard => TECHNICIAN_DASHBOARD_PATH,
            Self::AdminDashboard => ADMIN_DASHBOARD_PATH,
        }
    }

    /// Match a location path, ignoring query, fragment, and a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => LANDING_PATH,
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Roles allowed to render this view; `None` means public.
    #[must_use]
    pub fn allowed_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Landing | Self::Login | Self::Signup | Self::Dashboard => None,
            Self::HomeownerDashboard => Some(&[Role::Homeowner]),
            Self::TechnicianDashboard => Some(&[Role::Technician]),
            Self::AdminDashboard => Some(&[Role::Admin]),
        }
    }
}

/// Landing dashboard for `role`; anything without a role goes to `/`.
#[must_use]
pub fn dashboard_for(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Homeowner) => HOMEOWNER_DASHBOARD_PATH,
        Some(Role::Technician) => TECHNICIAN_DASHBOARD_PATH,
        Some(Role::Admin) => ADMIN_DASHBOARD_PATH,
        None => LANDING_PATH,
    }
}

/// Role router over a raw role string, as found in storage or a response.
#[must_use]
pub fn dashboard_for_raw(role: Option<&str>) -> &'static str {
    dashboard_for(role.and_then(Role::parse))
}

/// What opening a path results in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Redirect { to: &'static str, replace: bool },
}

/// Resolve a navigation to `path` for `session`.
#[must_use]
pub fn resolve_navigation(session: &Session, path: &str) -> Navigation {
    let Some(route) = AppRoute::from_path(path) else {
        return Navigation::Redirect { to: LANDING_PATH, replace: true };
    };
    if route == AppRoute::Dashboard {
        return Navigation::Redirect { to: dashboard_for(session.role()), replace: true };
    }
    let Some(allowed) = route.allowed_roles() else {
        return Navigation::Render(route);
    };
    match check_access(session, allowed) {
        GuardDecision::Render => Navigation::Render(route),
        GuardDecision::Redirect { to, replace, .. } => Navigation::Redirect { to, replace },
    }
}
