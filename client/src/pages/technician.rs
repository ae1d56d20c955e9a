//! Technician dashboard: assigned jobs, start work, file completion reports.

use leptos::prelude::*;
use leptos_meta::Title;

use super::{api_client, list_status, load_into, report_api_error, spawn_api};
use crate::components::completion_form::CompletionForm;
use crate::components::request_card::RequestCard;
use crate::config::ClientConfig;
use crate::net::types::{Completion, ServiceRequest};
use crate::state::listing::Listing;
use crate::state::session::SessionState;

#[component]
pub fn TechnicianDashboard() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ClientConfig>();

    let assigned = RwSignal::new(Listing::<ServiceRequest>::default());
    // Request whose completion form is open.
    let completing = RwSignal::new(None::<ServiceRequest>);
    let busy = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let refresh = move || {
        load_into(assigned, session, config, |c| async move { c.list_assigned().await });
    };
    refresh();

    let start = move |id: String| {
        let Some(client) = api_client(session, config) else {
            return;
        };
        busy.set(true);
        action_error.set(None);
        spawn_api(async move {
            let result = client.start_request(&id).await;
            busy.set(false);
            match result {
                Ok(_) => refresh(),
                Err(err) => action_error.set(Some(report_api_error(session, &err))),
            }
        });
    };

    let on_complete = Callback::new(move |completion: Completion| {
        let Some(request) = completing.get_untracked() else {
            return;
        };
        let Some(client) = api_client(session, config) else {
            return;
        };
        busy.set(true);
        spawn_api(async move {
            let result = client.complete_request(&request.id, &completion).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    log::info!("completed request {}", request.id);
                    completing.set(None);
                    refresh();
                }
                Err(err) => action_error.set(Some(report_api_error(session, &err))),
            }
        });
    });
    let on_cancel = Callback::new(move |()| completing.set(None));

    let card = move |request: ServiceRequest| {
        let status = request.status;
        let id = request.id.clone();
        let for_form = request.clone();
        view! {
            <RequestCard request=request>
                {status
                    .can_start()
                    .then(|| {
                        let id = id.clone();
                        view! {
                            <button
                                class="btn"
                                disabled=move || busy.get()
                                on:click=move |_| start(id.clone())
                            >
                                "Start work"
                            </button>
                        }
                    })}
                {status
                    .can_complete()
                    .then(|| {
                        let for_form = for_form.clone();
                        view! {
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    action_error.set(None);
                                    completing.set(Some(for_form.clone()));
                                }
                            >
                                "Complete"
                            </button>
                        }
                    })}
            </RequestCard>
        }
    };

    view! {
        <Title text="Assigned jobs · Warranty Tracker"/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Jobs for {}", session.username().unwrap_or_default())}</h1>
                <button class="btn btn--ghost" on:click=move |_| refresh()>
                    "Refresh"
                </button>
            </header>
            <section class="dashboard-page__section">
                {list_status(assigned, "Nothing assigned to you right now.")}
                <Show when=move || completing.get().is_none() && action_error.get().is_some()>
                    <p class="dashboard-page__error">{move || action_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dashboard-page__cards">
                    {move || assigned.with(|l| l.items.clone()).into_iter().map(card).collect_view()}
                </div>
            </section>
            {move || {
                completing
                    .get()
                    .map(|request| {
                        let title = request
                            .appliance_name
                            .unwrap_or_else(|| format!("Appliance #{}", request.appliance_id));
                        view! {
                            <div class="dialog-backdrop">
                                <div class="dialog">
                                    <h2>{format!("Complete: {title}")}</h2>
                                    <CompletionForm
                                        busy=Signal::from(busy)
                                        error=action_error
                                        on_submit=on_complete
                                        on_cancel=on_cancel
                                    />
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
