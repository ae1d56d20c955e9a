//! Login page: email, password, and the role the user signs in as.
//!
//! A successful response replaces the session and lands on the role's
//! dashboard. Responses that arrive after the user left the page, or after a
//! newer attempt started, are dropped by the `RequestGate`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use session::routes::SIGNUP_PATH;
use session::{RequestGate, Role, dashboard_for};

use super::spawn_api;
use crate::config::ClientConfig;
use crate::net::api;
use crate::state::session::SessionState;
use crate::util::auth::redirect_options;
use crate::util::forms::validate_email;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = validate_email(email)?;
    if password.trim().is_empty() {
        return Err("Enter your password.");
    }
    Ok((email, password.to_owned()))
}

/// `<select>` over every role, bound to `role`.
pub(crate) fn role_select(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <select
            class="login-input"
            on:change=move |ev| {
                if let Some(selected) = Role::parse(&event_target_value(&ev)) {
                    role.set(selected);
                }
            }
        >
            {Role::ALL
                .into_iter()
                .map(|r| {
                    view! {
                        <option value=r.as_str() selected=move || role.get() == r>
                            {r.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Homeowner);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let gate = RequestGate::new();
    on_cleanup({
        let gate = gate.clone();
        move || gate.invalidate()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked())
        {
            Ok(values) => values,
            Err(message) => {
                info.set(Some(message.to_owned()));
                return;
            }
        };
        let selected = role.get_untracked();
        busy.set(true);
        info.set(None);

        let ticket = gate.begin();
        let gate = gate.clone();
        let navigate = navigate.clone();
        spawn_api(async move {
            let result = api::login(config.api_base_url, &email_value, &password_value, selected).await;
            if !gate.is_current(ticket) {
                log::debug!("dropping stale login response");
                return;
            }
            busy.set(false);
            match result {
                Ok(creds) => {
                    let target = dashboard_for(Some(creds.role()));
                    session.login(creds);
                    navigate(target, redirect_options(true));
                }
                Err(err) => info.set(Some(err.user_message())),
            }
        });
    };

    view! {
        <Title text="Log in · Warranty Tracker"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Warranty Tracker"</h1>
                <p class="login-card__subtitle">"Log in to Service Pro"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {role_select(role)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? " <a href=SIGNUP_PATH>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
