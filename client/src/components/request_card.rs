//! Card for one service request; callers slot their role's actions in as children.

use leptos::prelude::*;

use crate::net::types::ServiceRequest;

#[component]
pub fn RequestCard(request: ServiceRequest, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let appliance = request
        .appliance_name
        .clone()
        .unwrap_or_else(|| format!("Appliance #{}", request.appliance_id));
    let people = [
        request.homeowner_username.as_ref().map(|u| format!("Homeowner: {u}")),
        request.technician_username.as_ref().map(|u| format!("Technician: {u}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");
    let completion = request.completion.clone().map(|c| {
        view! {
            <p class="request-card__completion">
                {format!(
                    "Completed {}: {} ({} h labor, ${:.2} parts)",
                    c.completed_on, c.notes, c.labor_hours, c.parts_cost,
                )}
            </p>
        }
    });

    view! {
        <article class="request-card">
            <header class="request-card__header">
                <span class="request-card__appliance">{appliance}</span>
                <span class=request.status.css_class()>{request.status.label()}</span>
            </header>
            <p class="request-card__description">{request.description.clone()}</p>
            <p class="request-card__meta">
                {request.created_at.clone().map(|at| format!("Opened {at}"))}
                {(!people.is_empty()).then(|| format!(" · {people}"))}
            </p>
            {completion}
            <footer class="request-card__actions">{children.map(|c| c())}</footer>
        </article>
    }
}
