//! Top navigation bar showing the signed-in identity and session actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::dashboard_for;
use session::routes::{LANDING_PATH, LOGIN_PATH, SIGNUP_PATH};

use crate::state::session::SessionState;
use crate::util::auth::redirect_options;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, redirect_options(true));
    };

    let identity = move || {
        let name = session.username().unwrap_or_default();
        let role = session.role().map(|r| r.label()).unwrap_or_default();
        format!("{name} ({role})")
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=LANDING_PATH>
                "Warranty Tracker"
            </a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || session.is_authenticated()
                fallback=|| {
                    view! {
                        <a class="nav-bar__link" href=LOGIN_PATH>
                            "Log in"
                        </a>
                        <a class="nav-bar__link btn" href=SIGNUP_PATH>
                            "Sign up"
                        </a>
                    }
                }
            >
                <a class="nav-bar__link" href=move || dashboard_for(session.role())>
                    "Dashboard"
                </a>
                <span class="nav-bar__self">{identity}</span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone() title="Log out">
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
