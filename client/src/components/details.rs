//! Property-details section: guest capacity, rooms, and bathrooms.
//!
//! Each input writes raw text through the draft's setters, which keep the
//! previous value on unparseable input and clamp to the field's range.

use leptos::prelude::*;
use marketplace::details::{DetailsDraft, MAX_BATHROOMS, MAX_GUESTS, MIN_BATHROOMS, MIN_BEDROOMS, MIN_BEDS, MIN_GUESTS};
use marketplace::{ListingDraft, SectionForm, SectionKey, SectionSlice};

use crate::components::section_header::{SectionHeader, report_section};

#[component]
pub fn PropertyDetails(
    initial_data: ListingDraft,
    update_form_data: Callback<SectionSlice>,
    #[prop(into)] expanded: Signal<bool>,
    toggle_section: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(DetailsDraft::seed(&initial_data));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        report_section(draft, update_form_data);
    };

    view! {
        <section class="wizard-section">
            <SectionHeader section=SectionKey::Details expanded=expanded toggle_section=toggle_section />
            <Show when=move || expanded.get()>
                <form class="wizard-section__form wizard-section__form--grid" on:submit=on_submit>
                    <label class="wizard-field">
                        "Guests"
                        <input
                            type="number"
                            min=MIN_GUESTS
                            max=MAX_GUESTS
                            prop:value=move || draft.with(|d| d.values().guests.to_string())
                            on:input=move |ev| draft.update(|d| d.set_guests(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Bedrooms"
                        <input
                            type="number"
                            min=MIN_BEDROOMS
                            prop:value=move || draft.with(|d| d.values().bedrooms.to_string())
                            on:input=move |ev| draft.update(|d| d.set_bedrooms(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Beds"
                        <input
                            type="number"
                            min=MIN_BEDS
                            prop:value=move || draft.with(|d| d.values().beds.to_string())
                            on:input=move |ev| draft.update(|d| d.set_beds(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Bathrooms"
                        <input
                            type="number"
                            step="0.5"
                            min=MIN_BATHROOMS
                            max=MAX_BATHROOMS
                            prop:value=move || draft.with(|d| d.values().bathrooms.to_string())
                            on:input=move |ev| draft.update(|d| d.set_bathrooms(&event_target_value(&ev)))
                        />
                    </label>
                    <button class="btn wizard-section__save" type="submit">"Save"</button>
                </form>
            </Show>
        </section>
    }
}
