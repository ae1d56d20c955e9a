//! Homeowner dashboard: appliances, their warranties, and service requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only behind `RequireRole` for `Homeowner`. All three sections load
//! once on mount and reload after a mutation touches them.

use leptos::prelude::*;
use leptos_meta::Title;

use super::{api_client, list_status, load_into, report_api_error, spawn_api};
use crate::components::appliance_card::ApplianceCard;
use crate::components::appliance_form::ApplianceForm;
use crate::components::request_card::RequestCard;
use crate::config::ClientConfig;
use crate::net::types::{Appliance, ApplianceInput, ExpiryNotice, NewServiceRequest, ServiceRequest};
use crate::state::listing::Listing;
use crate::state::session::SessionState;

/// Which overlay is open.
#[derive(Clone, Debug, Default, PartialEq)]
enum Dialog {
    #[default]
    Closed,
    Create,
    Edit(Appliance),
    Delete(Appliance),
    Request(Appliance),
}

#[component]
pub fn HomeownerDashboard() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ClientConfig>();

    let appliances = RwSignal::new(Listing::<Appliance>::default());
    let requests = RwSignal::new(Listing::<ServiceRequest>::default());
    let expiring = RwSignal::new(Listing::<ExpiryNotice>::default());

    let dialog = RwSignal::new(Dialog::Closed);
    let busy = RwSignal::new(false);
    let dialog_error = RwSignal::new(None::<String>);
    let description = RwSignal::new(String::new());

    let window = config.expiry_window_days;
    let refresh_appliances = move || {
        load_into(appliances, session, config, |c| async move { c.list_appliances().await });
    };
    let refresh_requests = move || {
        load_into(requests, session, config, |c| async move { c.list_my_requests().await });
    };
    let refresh_expiring = move || {
        load_into(expiring, session, config, move |c| async move { c.expiring(window).await });
    };

    refresh_appliances();
    refresh_requests();
    refresh_expiring();

    let open = move |next: Dialog| {
        dialog_error.set(None);
        description.set(String::new());
        dialog.set(next);
    };
    let close = Callback::new(move |()| dialog.set(Dialog::Closed));
    let on_edit = Callback::new(move |a: Appliance| open(Dialog::Edit(a)));
    let on_delete = Callback::new(move |a: Appliance| open(Dialog::Delete(a)));
    let on_request = Callback::new(move |a: Appliance| open(Dialog::Request(a)));

    let on_save = Callback::new(move |input: ApplianceInput| {
        let Some(client) = api_client(session, config) else {
            return;
        };
        let editing = match dialog.get_untracked() {
            Dialog::Edit(a) => Some(a.id),
            _ => None,
        };
        busy.set(true);
        spawn_api(async move {
            let result = match editing {
                Some(id) => client.update_appliance(&id, &input).await,
                None => client.create_appliance(&input).await,
            };
            busy.set(false);
            match result {
                Ok(saved) => {
                    log::info!("saved appliance {}", saved.id);
                    dialog.set(Dialog::Closed);
                    refresh_appliances();
                    refresh_expiring();
                }
                Err(err) => dialog_error.set(Some(report_api_error(session, &err))),
            }
        });
    });

    let confirm_delete = move |_: leptos::ev::MouseEvent| {
        let Dialog::Delete(appliance) = dialog.get_untracked() else {
            return;
        };
        let Some(client) = api_client(session, config) else {
            return;
        };
        busy.set(true);
        spawn_api(async move {
            let result = client.delete_appliance(&appliance.id).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    dialog.set(Dialog::Closed);
                    refresh_appliances();
                    refresh_requests();
                    refresh_expiring();
                }
                Err(err) => dialog_error.set(Some(report_api_error(session, &err))),
            }
        });
    };

    let submit_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Dialog::Request(appliance) = dialog.get_untracked() else {
            return;
        };
        let text = description.get_untracked().trim().to_owned();
        if text.is_empty() {
            dialog_error.set(Some("Describe the problem.".to_owned()));
            return;
        }
        let Some(client) = api_client(session, config) else {
            return;
        };
        let body = NewServiceRequest {
            appliance_id: appliance.id,
            description: text,
        };
        busy.set(true);
        spawn_api(async move {
            let result = client.open_request(&body).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    dialog.set(Dialog::Closed);
                    refresh_requests();
                }
                Err(err) => dialog_error.set(Some(report_api_error(session, &err))),
            }
        });
    };

    let busy_signal = Signal::from(busy);

    let dialog_view = move || match dialog.get() {
        Dialog::Closed => None,
        Dialog::Create => Some(
            view! {
                <div class="dialog">
                    <h2>"Register an appliance"</h2>
                    <ApplianceForm
                        submit_label="Register"
                        busy=busy_signal
                        error=dialog_error
                        on_submit=on_save
                        on_cancel=close
                    />
                </div>
            }
            .into_any(),
        ),
        Dialog::Edit(appliance) => Some(
            view! {
                <div class="dialog">
                    <h2>{format!("Edit {}", appliance.name)}</h2>
                    <ApplianceForm
                        initial=ApplianceInput::from(&appliance)
                        submit_label="Save changes"
                        busy=busy_signal
                        error=dialog_error
                        on_submit=on_save
                        on_cancel=close
                    />
                </div>
            }
            .into_any(),
        ),
        Dialog::Delete(appliance) => Some(
            view! {
                <div class="dialog">
                    <h2>"Delete appliance?"</h2>
                    <p>{format!("{} ({}) and its records will be removed.", appliance.name, appliance.serial_number)}</p>
                    <p class="form-error">{move || dialog_error.get()}</p>
                    <div class="form-actions">
                        <button class="btn btn--danger" on:click=confirm_delete disabled=move || busy.get()>
                            "Delete"
                        </button>
                        <button class="btn btn--ghost" on:click=move |_| close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            }
            .into_any(),
        ),
        Dialog::Request(appliance) => Some(
            view! {
                <div class="dialog">
                    <h2>{format!("Request service for {}", appliance.name)}</h2>
                    <form class="request-form" on:submit=submit_request>
                        <textarea
                            class="form-input"
                            rows="4"
                            placeholder="What is wrong?"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                        <p class="form-error">{move || dialog_error.get()}</p>
                        <div class="form-actions">
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Submit request"
                            </button>
                            <button class="btn btn--ghost" type="button" on:click=move |_| close.run(())>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            }
            .into_any(),
        ),
    };

    view! {
        <Title text="My appliances · Warranty Tracker"/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", session.username().unwrap_or_default())}</h1>
                <button class="btn btn--primary" on:click=move |_| open(Dialog::Create)>
                    "+ Register appliance"
                </button>
            </header>

            <section class="dashboard-page__section">
                <h2>{move || format!("Expiring within {window} days")}</h2>
                {list_status(expiring, "No warranties expiring soon.")}
                <ul class="expiry-list">
                    {move || {
                        expiring
                            .with(|l| l.items.clone())
                            .into_iter()
                            .map(|n| {
                                let days = n
                                    .days_remaining
                                    .map(|d| format!(" ({d} days left)"))
                                    .unwrap_or_default();
                                view! {
                                    <li>
                                        <strong>{n.appliance_name}</strong>
                                        {format!(" expires {}{days}", n.warranty_expiry_date)}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="dashboard-page__section">
                <h2>"My appliances"</h2>
                {list_status(appliances, "No appliances registered yet.")}
                <div class="dashboard-page__cards">
                    {move || {
                        appliances
                            .with(|l| l.items.clone())
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <ApplianceCard
                                        appliance=a
                                        window_days=window
                                        on_edit=on_edit
                                        on_delete=on_delete
                                        on_request=on_request
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <section class="dashboard-page__section">
                <h2>"My service requests"</h2>
                {list_status(requests, "No service requests yet.")}
                <div class="dashboard-page__cards">
                    {move || {
                        requests
                            .with(|l| l.items.clone())
                            .into_iter()
                            .map(|r| view! { <RequestCard request=r/> })
                            .collect_view()
                    }}
                </div>
            </section>

            {move || dialog_view().map(|d| view! { <div class="dialog-backdrop">{d}</div> })}
        </div>
    }
}
