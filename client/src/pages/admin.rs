//! Admin dashboard: dispatch service requests and manage warranty notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only behind `RequireRole` for `Admin`. Sections load independently
//! so one failing endpoint leaves the rest usable.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_meta::Title;

use super::{api_client, list_status, load_into, report_api_error, spawn_api};
use crate::components::appliance_card::ApplianceCard;
use crate::components::request_card::RequestCard;
use crate::config::ClientConfig;
use crate::net::types::{Appliance, ExpiryNotice, ServiceRequest, Technician};
use crate::state::listing::Listing;
use crate::state::session::SessionState;

/// Parse the notification window input; blank or invalid keeps `fallback`.
fn parse_window(raw: &str, fallback: u32) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|d| *d > 0).unwrap_or(fallback)
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ClientConfig>();

    let requests = RwSignal::new(Listing::<ServiceRequest>::default());
    let technicians = RwSignal::new(Listing::<Technician>::default());
    let appliances = RwSignal::new(Listing::<Appliance>::default());
    let expiring = RwSignal::new(Listing::<ExpiryNotice>::default());

    let window = RwSignal::new(config.expiry_window_days);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let refresh_requests = move || {
        load_into(requests, session, config, |c| async move { c.list_all_requests().await });
    };
    let refresh_expiring = move || {
        let days = window.get_untracked();
        load_into(expiring, session, config, move |c| async move { c.expiring(days).await });
    };
    refresh_requests();
    refresh_expiring();
    load_into(technicians, session, config, |c| async move { c.list_technicians().await });
    load_into(appliances, session, config, |c| async move { c.list_all_appliances().await });

    let assign = move |request_id: String, technician_id: String| {
        if technician_id.is_empty() {
            return;
        }
        let Some(client) = api_client(session, config) else {
            return;
        };
        busy.set(true);
        notice.set(None);
        spawn_api(async move {
            let result = client.assign_technician(&request_id, &technician_id).await;
            busy.set(false);
            match result {
                Ok(_) => refresh_requests(),
                Err(err) => notice.set(Some(report_api_error(session, &err))),
            }
        });
    };

    let send_notifications = move |_: leptos::ev::MouseEvent| {
        let Some(client) = api_client(session, config) else {
            return;
        };
        let days = window.get_untracked();
        busy.set(true);
        notice.set(None);
        spawn_api(async move {
            let result = client.send_expiry_notifications(days).await;
            busy.set(false);
            match result {
                Ok(report) => {
                    log::info!("sent {} expiry notifications", report.sent);
                    notice.set(Some(format!("Sent {} notification(s).", report.sent)));
                }
                Err(err) => notice.set(Some(report_api_error(session, &err))),
            }
        });
    };

    let technician_options = move || {
        technicians
            .with(|l| l.items.clone())
            .into_iter()
            .map(|t| {
                let label = match &t.specialty {
                    Some(s) => format!("{} ({s})", t.username),
                    None => t.username.clone(),
                };
                view! { <option value=t.id>{label}</option> }
            })
            .collect_view()
    };

    let request_card = move |request: ServiceRequest| {
        let assignable = request.status.is_assignable();
        let id = request.id.clone();
        view! {
            <RequestCard request=request>
                {assignable
                    .then(|| {
                        let id = id.clone();
                        view! {
                            <select
                                class="form-input"
                                disabled=move || busy.get()
                                on:change=move |ev| assign(id.clone(), event_target_value(&ev))
                            >
                                <option value="">"Assign technician..."</option>
                                {technician_options}
                            </select>
                        }
                    })}
            </RequestCard>
        }
    };

    view! {
        <Title text="Admin · Warranty Tracker"/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Administration"</h1>
            </header>
            <Show when=move || notice.get().is_some()>
                <p class="dashboard-page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <section class="dashboard-page__section">
                <h2>"Service requests"</h2>
                {list_status(requests, "No service requests.")}
                {list_status(technicians, "No technicians registered.")}
                <div class="dashboard-page__cards">
                    {move || requests.with(|l| l.items.clone()).into_iter().map(request_card).collect_view()}
                </div>
            </section>

            <section class="dashboard-page__section">
                <h2>"Expiring warranties"</h2>
                <div class="form-actions">
                    <label class="form-field">
                        <span class="form-field__label">"Window (days)"</span>
                        <input
                            class="form-input"
                            type="number"
                            min="1"
                            prop:value=move || window.get().to_string()
                            on:change=move |ev| {
                                window.set(parse_window(&event_target_value(&ev), config.expiry_window_days));
                                refresh_expiring();
                            }
                        />
                    </label>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=send_notifications>
                        "Send expiry notifications"
                    </button>
                </div>
                {list_status(expiring, "No warranties expiring in this window.")}
                <table class="expiry-table">
                    <thead>
                        <tr>
                            <th>"Appliance"</th>
                            <th>"Owner"</th>
                            <th>"Expires"</th>
                            <th>"Days left"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            expiring
                                .with(|l| l.items.clone())
                                .into_iter()
                                .map(|n| {
                                    view! {
                                        <tr>
                                            <td>{n.appliance_name}</td>
                                            <td>{n.owner_username.unwrap_or_default()}</td>
                                            <td>{n.warranty_expiry_date}</td>
                                            <td>{n.days_remaining.map(|d| d.to_string()).unwrap_or_default()}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>

            <section class="dashboard-page__section">
                <h2>"All appliances"</h2>
                {list_status(appliances, "No appliances registered.")}
                <div class="dashboard-page__cards">
                    {move || {
                        appliances
                            .with(|l| l.items.clone())
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <ApplianceCard appliance=a window_days=config.expiry_window_days show_owner=true/>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}
