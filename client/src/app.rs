//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the single `SessionState` for the tab, seeded from
//! `localStorage` and mirrored back to it on every change. Protected routes
//! wrap their dashboard in `RequireRole`; `/dashboard` defers to the role
//! router; unknown paths fall back to `/`.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use session::Role;
use session::routes::LANDING_PATH;

use crate::components::nav_bar::NavBar;
use crate::components::require_role::RequireRole;
use crate::config::ClientConfig;
use crate::pages::{
    admin::AdminDashboard, dashboard::DashboardRedirect, homeowner::HomeownerDashboard, landing::LandingPage,
    login::LoginPage, signup::SignupPage, technician::TechnicianDashboard,
};
use crate::state::session::SessionState;
use crate::util::auth::redirect_options;
use crate::util::storage::{load_local_session, sync_local_storage};

const HOMEOWNER_ONLY: &[Role] = &[Role::Homeowner];
const TECHNICIAN_ONLY: &[Role] = &[Role::Technician];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Root application component.
///
/// Provides shared contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionState::new(load_local_session(), sync_local_storage);
    log::debug!("starting with {:?}", session);

    provide_context(config);
    provide_context(session);

    view! {
        <Title text="Warranty Tracker"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| view! { <Redirect path=LANDING_PATH options=redirect_options(true)/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardRedirect/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("homeowner"))
                    view=|| view! { <RequireRole allowed=HOMEOWNER_ONLY><HomeownerDashboard/></RequireRole> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("technician"))
                    view=|| view! { <RequireRole allowed=TECHNICIAN_ONLY><TechnicianDashboard/></RequireRole> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("admin"))
                    view=|| view! { <RequireRole allowed=ADMIN_ONLY><AdminDashboard/></RequireRole> }
                />
            </Routes>
        </Router>
    }
}
