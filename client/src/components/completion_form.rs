//! Technician completion form for a service request.

use leptos::prelude::*;

use crate::net::types::Completion;
use crate::util::forms::{CompletionDraft, validate_completion};
use crate::util::warranty;

#[component]
pub fn CompletionForm(
    busy: Signal<bool>,
    error: RwSignal<Option<String>>,
    on_submit: Callback<Completion>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(CompletionDraft {
        completed_on: warranty::today().map(|d| d.to_string()).unwrap_or_default(),
        ..CompletionDraft::default()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_completion(&draft.get_untracked()) {
            Ok(completion) => {
                error.set(None);
                on_submit.run(completion);
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    view! {
        <form class="completion-form" on:submit=submit>
            <label class="form-field">
                <span class="form-field__label">"Work performed"</span>
                <textarea
                    class="form-input"
                    rows="3"
                    prop:value=move || draft.with(|d| d.notes.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.notes = value);
                    }
                ></textarea>
            </label>
            <label class="form-field">
                <span class="form-field__label">"Labor hours"</span>
                <input
                    class="form-input"
                    type="number"
                    min="0"
                    step="0.25"
                    prop:value=move || draft.with(|d| d.labor_hours.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.labor_hours = value);
                    }
                />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Parts cost"</span>
                <input
                    class="form-input"
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || draft.with(|d| d.parts_cost.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.parts_cost = value);
                    }
                />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Completed on"</span>
                <input
                    class="form-input"
                    type="date"
                    prop:value=move || draft.with(|d| d.completed_on.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.completed_on = value);
                    }
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="form-actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit completion"
                </button>
                <button class="btn btn--ghost" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
