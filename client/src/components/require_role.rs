//! Route guard wrapper for role-restricted views.
//!
//! Children render only while the session satisfies `allowed`; otherwise the
//! guard navigates away (replacing history) and renders nothing.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Role;

use crate::state::session::SessionState;
use crate::util::auth::install_role_redirect;

#[component]
pub fn RequireRole(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigate();
    install_role_redirect(session, allowed, move |to, options| navigate(to, options));

    view! {
        <Show
            when=move || session.check(allowed).is_allowed()
            fallback=|| view! { <p class="guard-message">"Redirecting to login..."</p> }
        >
            {children()}
        </Show>
    }
}
