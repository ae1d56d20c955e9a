//! Register/edit appliance form.
//!
//! Validation runs locally first; `on_submit` only sees a clean
//! `ApplianceInput`. Server-side failures come back through `error`.

use leptos::prelude::*;

use crate::net::types::ApplianceInput;
use crate::util::forms::{ApplianceDraft, validate_appliance};

#[component]
pub fn ApplianceForm(
    #[prop(optional)] initial: Option<ApplianceInput>,
    submit_label: &'static str,
    busy: Signal<bool>,
    error: RwSignal<Option<String>>,
    on_submit: Callback<ApplianceInput>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(initial.as_ref().map(ApplianceDraft::from).unwrap_or_default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_appliance(&draft.get_untracked()) {
            Ok(input) => {
                error.set(None);
                on_submit.run(input);
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    let field = move |label: &'static str,
                      kind: &'static str,
                      get: fn(&ApplianceDraft) -> String,
                      set: fn(&mut ApplianceDraft, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-input"
                    type=kind
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| set(d, value));
                    }
                />
            </label>
        }
    };

    view! {
        <form class="appliance-form" on:submit=submit>
            {field("Name", "text", |d| d.name.clone(), |d, v| d.name = v)}
            {field("Brand", "text", |d| d.brand.clone(), |d, v| d.brand = v)}
            {field("Model", "text", |d| d.model.clone(), |d, v| d.model = v)}
            {field("Serial number", "text", |d| d.serial_number.clone(), |d, v| d.serial_number = v)}
            {field("Purchase date", "date", |d| d.purchase_date.clone(), |d, v| d.purchase_date = v)}
            {field(
                "Warranty expiry date",
                "date",
                |d| d.warranty_expiry_date.clone(),
                |d, v| d.warranty_expiry_date = v,
            )}
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="form-actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {submit_label}
                </button>
                <button class="btn btn--ghost" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
