//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, dialogs, busy flags)
//! and delegates rendering details to `components`. The helpers below hold
//! the plumbing every dashboard shares.

pub mod admin;
pub mod dashboard;
pub mod homeowner;
pub mod landing;
pub mod login;
pub mod signup;
pub mod technician;

use std::future::Future;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{ApiClient, ApiError};
use crate::state::listing::Listing;
use crate::state::session::SessionState;

/// Run `fut` on the browser event loop. Native builds drop it unpolled.
pub(crate) fn spawn_api<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Client bound to the current token, or `None` when logged out.
pub(crate) fn api_client(session: SessionState, config: ClientConfig) -> Option<ApiClient> {
    session
        .token_untracked()
        .map(|token| ApiClient::new(config.api_base_url, token))
}

/// User-facing text for `err`. A rejected token ends the session, which in
/// turn sends the route guard to `/login`.
pub(crate) fn report_api_error(session: SessionState, err: &ApiError) -> String {
    if *err == ApiError::Unauthorized {
        log::info!("token rejected; logging out");
        session.logout();
    } else {
        log::warn!("api call failed: {err}");
    }
    err.to_string()
}

/// Fetch one dashboard section into `listing`.
pub(crate) fn load_into<T, F, Fut>(
    listing: RwSignal<Listing<T>>,
    session: SessionState,
    config: ClientConfig,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: FnOnce(ApiClient) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(client) = api_client(session, config) else {
        return;
    };
    listing.update(Listing::start);
    let pending = fetch(client);
    spawn_api(async move {
        let result = pending.await.map_err(|e| report_api_error(session, &e));
        listing.update(|l| l.finish(result));
    });
}

/// Error, loading, and empty-state lines for one list section.
pub(crate) fn list_status<T>(listing: RwSignal<Listing<T>>, empty_text: &'static str) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        {move || {
            listing
                .with(|l| l.error.clone())
                .map(|message| view! { <p class="dashboard-page__error">{message}</p> })
        }}
        {move || listing.with(|l| l.loading).then(|| view! { <p class="dashboard-page__hint">"Loading..."</p> })}
        {move || listing.with(Listing::is_empty).then(|| view! { <p class="dashboard-page__hint">{empty_text}</p> })}
    }
}
