//! Basic-information section: title, description, property type, category.

use leptos::prelude::*;
use marketplace::basic::{BasicInfoDraft, DEFAULT_CATEGORIES, DEFAULT_PROPERTY_TYPES};
use marketplace::{ListingDraft, SectionForm, SectionKey, SectionSlice};

use crate::components::section_header::{SectionHeader, report_section};

fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|s| (*s).to_owned()).collect()
}

#[component]
pub fn BasicInformation(
    initial_data: ListingDraft,
    update_form_data: Callback<SectionSlice>,
    #[prop(into)] expanded: Signal<bool>,
    toggle_section: Callback<()>,
    #[prop(default = owned(DEFAULT_PROPERTY_TYPES))] property_types: Vec<String>,
    #[prop(default = owned(DEFAULT_CATEGORIES))] categories: Vec<String>,
) -> impl IntoView {
    let draft = RwSignal::new(BasicInfoDraft::seed(&initial_data));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        report_section(draft, update_form_data);
    };

    view! {
        <section class="wizard-section">
            <SectionHeader section=SectionKey::Basic expanded=expanded toggle_section=toggle_section />
            <Show when=move || expanded.get()>
                <form class="wizard-section__form" on:submit=on_submit>
                    <label class="wizard-field">
                        "Title"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    <label class="wizard-field">
                        "Description"
                        <textarea
                            rows="4"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="wizard-field">
                        "Property type"
                        <select
                            prop:value=move || draft.with(|d| d.property_type.clone())
                            on:change=move |ev| draft.update(|d| d.property_type = event_target_value(&ev))
                        >
                            <option value="">"Select a type"</option>
                            {property_types
                                .clone()
                                .into_iter()
                                .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="wizard-field">
                        "Category"
                        <select
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {categories
                                .clone()
                                .into_iter()
                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="btn wizard-section__save" type="submit">"Save"</button>
                </form>
            </Show>
        </section>
    }
}
