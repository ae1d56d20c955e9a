//! `/dashboard`: send the user to their role's dashboard.
//!
//! The role is read once, untracked; the redirect replaces history so the
//! back button skips this hop. Anonymous users and unknown roles go to `/`.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::dashboard_for;

use crate::state::session::SessionState;
use crate::util::auth::redirect_options;

#[component]
pub fn DashboardRedirect() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let target = dashboard_for(session.role_untracked());
    log::debug!("dashboard redirect -> {target}");

    view! { <Redirect path=target options=redirect_options(true)/> }
}
