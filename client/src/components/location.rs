//! Location section with inline validation.
//!
//! Required fields update on every keystroke and are trimmed on submit.
//! Optional fields commit on `change`, since the draft trims them on every
//! update and per-keystroke trimming would swallow typed spaces.

use leptos::prelude::*;
use marketplace::location::LocationDraft;
use marketplace::{ListingDraft, SectionForm, SectionKey, SectionSlice};

use crate::components::section_header::{SectionError, SectionHeader, report_section};

#[component]
pub fn LocationSection(
    initial_data: ListingDraft,
    update_form_data: Callback<SectionSlice>,
    #[prop(into)] expanded: Signal<bool>,
    toggle_section: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(LocationDraft::seed(&initial_data));
    let error = Signal::derive(move || draft.with(|d| d.error().map(str::to_owned)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        report_section(draft, update_form_data);
    };

    view! {
        <section class="wizard-section">
            <SectionHeader section=SectionKey::Location expanded=expanded toggle_section=toggle_section />
            <Show when=move || expanded.get()>
                <form class="wizard-section__form" on:submit=on_submit>
                    <SectionError error=error />
                    <label class="wizard-field">
                        "Address *"
                        <input
                            type="text"
                            placeholder="123 Main St"
                            prop:value=move || draft.with(|d| d.address.clone())
                            on:input=move |ev| draft.update(|d| d.address = event_target_value(&ev))
                        />
                    </label>
                    <label class="wizard-field">
                        "City *"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.city.clone())
                            on:input=move |ev| draft.update(|d| d.city = event_target_value(&ev))
                        />
                    </label>
                    <label class="wizard-field">
                        "State / Province"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.state().to_owned())
                            on:change=move |ev| draft.update(|d| d.set_state(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Country *"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.country.clone())
                            on:input=move |ev| draft.update(|d| d.country = event_target_value(&ev))
                        />
                    </label>
                    <label class="wizard-field">
                        "ZIP / Postal code"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.zip_code().to_owned())
                            on:change=move |ev| draft.update(|d| d.set_zip_code(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Neighborhood"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.neighborhood().to_owned())
                            on:change=move |ev| draft.update(|d| d.set_neighborhood(&event_target_value(&ev)))
                        />
                    </label>
                    <button class="btn wizard-section__save" type="submit">"Save"</button>
                </form>
            </Show>
        </section>
    }
}
