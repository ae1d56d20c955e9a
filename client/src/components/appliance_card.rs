//! Card for one appliance with its warranty badge and optional actions.

use leptos::prelude::*;

use crate::net::types::Appliance;
use crate::util::warranty::{self, WarrantyStatus};

#[component]
pub fn ApplianceCard(
    appliance: Appliance,
    /// Days counted as "expiring soon".
    window_days: u32,
    #[prop(optional)] show_owner: bool,
    #[prop(optional)] on_edit: Option<Callback<Appliance>>,
    #[prop(optional)] on_delete: Option<Callback<Appliance>>,
    #[prop(optional)] on_request: Option<Callback<Appliance>>,
) -> impl IntoView {
    let status: WarrantyStatus = warranty::classify(&appliance.warranty_expiry_date, warranty::today(), window_days);
    let owner = show_owner.then(|| appliance.owner_username.clone().unwrap_or_default());

    let action = |label: &'static str, class: &'static str, cb: Option<Callback<Appliance>>, item: Appliance| {
        cb.map(|cb| {
            view! {
                <button class=class on:click=move |_| cb.run(item.clone())>
                    {label}
                </button>
            }
        })
    };

    view! {
        <article class="appliance-card">
            <header class="appliance-card__header">
                <span class="appliance-card__name">{appliance.name.clone()}</span>
                <span class=status.css_class()>{status.label()}</span>
            </header>
            <dl class="appliance-card__facts">
                <dt>"Brand / model"</dt>
                <dd>{format!("{} {}", appliance.brand, appliance.model)}</dd>
                <dt>"Serial"</dt>
                <dd>{appliance.serial_number.clone()}</dd>
                <dt>"Purchased"</dt>
                <dd>{appliance.purchase_date.clone()}</dd>
                <dt>"Warranty until"</dt>
                <dd>{appliance.warranty_expiry_date.clone()}</dd>
                {owner.map(|owner| view! { <dt>"Owner"</dt><dd>{owner}</dd> })}
            </dl>
            <footer class="appliance-card__actions">
                {action("Request service", "btn", on_request, appliance.clone())}
                {action("Edit", "btn btn--ghost", on_edit, appliance.clone())}
                {action("Delete", "btn btn--danger", on_delete, appliance)}
            </footer>
        </article>
    }
}
