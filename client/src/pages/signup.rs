//! Account registration page. Signup never logs the user in; on success the
//! page hands off to `/login`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use session::routes::LOGIN_PATH;
use session::{RequestGate, Role};

use super::login::role_select;
use super::spawn_api;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::SignupRequest;
use crate::util::auth::redirect_options;
use crate::util::forms::{MIN_PASSWORD_LEN, required, validate_email};

#[derive(Clone, Debug, Default, PartialEq)]
struct SignupDraft {
    username: String,
    email: String,
    password: String,
    confirm: String,
    phone: String,
}

fn validate_signup(draft: &SignupDraft, role: Role) -> Result<SignupRequest, &'static str> {
    let username = required(&draft.username, "Choose a username.")?;
    let email = validate_email(&draft.email)?;
    if draft.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if draft.password != draft.confirm {
        return Err("Passwords do not match.");
    }
    let phone = Some(draft.phone.trim().to_owned()).filter(|p| !p.is_empty());
    Ok(SignupRequest {
        username,
        email,
        password: draft.password.clone(),
        role,
        phone,
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let draft = RwSignal::new(SignupDraft::default());
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
        let request = match validate_signup(&draft.get_untracked(), role.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                info.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        info.set(None);

        let ticket = gate.begin();
        let gate = gate.clone();
        let navigate = navigate.clone();
        spawn_api(async move {
            let result = api::signup(config.api_base_url, &request).await;
            if !gate.is_current(ticket) {
                log::debug!("dropping stale signup response");
                return;
            }
            busy.set(false);
            match result {
                Ok(()) => {
                    log::info!("account created for {}", request.username);
                    navigate(LOGIN_PATH, redirect_options(true));
                }
                Err(err) => info.set(Some(err.user_message())),
            }
        });
    };

    let input = move |kind: &'static str,
                      placeholder: &'static str,
                      get: fn(&SignupDraft) -> String,
                      set: fn(&mut SignupDraft, String)| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            />
        }
    };

    view! {
        <Title text="Sign up · Warranty Tracker"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {input("text", "Username", |d| d.username.clone(), |d, v| d.username = v)}
                    {input("email", "you@example.com", |d| d.email.clone(), |d, v| d.email = v)}
                    {input("password", "Password (8+ characters)", |d| d.password.clone(), |d, v| d.password = v)}
                    {input("password", "Confirm password", |d| d.confirm.clone(), |d, v| d.confirm = v)}
                    {input("tel", "Phone (optional)", |d| d.phone.clone(), |d, v| d.phone = v)}
                    {role_select(role)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || info.get().is_some()>
                    <p class="login-message">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? " <a href=LOGIN_PATH>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
