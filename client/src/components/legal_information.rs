//! Legal section: optional short-term rental license.
//!
//! Saving with every field blank still reports the section, as an empty
//! object, so the aggregate can tell "no license" from "not visited".

use leptos::prelude::*;
use marketplace::legal::LegalDraft;
use marketplace::{ListingDraft, SectionForm, SectionKey, SectionSlice};

use crate::components::section_header::{SectionHeader, report_section};

const LICENSE_TYPES: &[&str] = &["short-term rental", "business", "tourism", "other"];

#[component]
pub fn LegalInformation(
    initial_data: ListingDraft,
    update_form_data: Callback<SectionSlice>,
    #[prop(into)] expanded: Signal<bool>,
    toggle_section: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(LegalDraft::seed(&initial_data));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        report_section(draft, update_form_data);
    };

    view! {
        <section class="wizard-section">
            <SectionHeader section=SectionKey::Legal expanded=expanded toggle_section=toggle_section />
            <Show when=move || expanded.get()>
                <form class="wizard-section__form" on:submit=on_submit>
                    <p class="wizard-section__hint">"Leave blank if your area does not require a license."</p>
                    <label class="wizard-field">
                        "License number"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.license_number.clone())
                            on:input=move |ev| draft.update(|d| d.license_number = event_target_value(&ev))
                        />
                    </label>
                    <label class="wizard-field">
                        "License type"
                        <select
                            prop:value=move || draft.with(|d| d.license_type.clone())
                            on:change=move |ev| draft.update(|d| d.license_type = event_target_value(&ev))
                        >
                            <option value="">"Select a type"</option>
                            {LICENSE_TYPES
                                .iter()
                                .map(|t| view! { <option value=*t>{*t}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="wizard-field">
                        "Expiry date"
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.expiry_date.clone())
                            on:input=move |ev| draft.update(|d| d.expiry_date = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn wizard-section__save" type="submit">"Save"</button>
                </form>
            </Show>
        </section>
    }
}
