//! Amenities section: a checkbox grid over the offered amenity ids.

use leptos::prelude::*;
use marketplace::amenities::{AmenitiesDraft, DEFAULT_AMENITIES, amenity_label};
use marketplace::{ListingDraft, SectionForm, SectionKey, SectionSlice};

use crate::components::section_header::{SectionHeader, report_section};

#[component]
pub fn Amenities(
    initial_data: ListingDraft,
    update_form_data: Callback<SectionSlice>,
    #[prop(into)] expanded: Signal<bool>,
    toggle_section: Callback<()>,
    #[prop(default = DEFAULT_AMENITIES.iter().map(|s| (*s).to_owned()).collect())] amenities_list: Vec<String>,
) -> impl IntoView {
    let draft = RwSignal::new(AmenitiesDraft::seed(&initial_data));
    let selected_count = move || draft.with(|d| d.selected().len());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        report_section(draft, update_form_data);
    };

    view! {
        <section class="wizard-section">
            <SectionHeader section=SectionKey::Amenities expanded=expanded toggle_section=toggle_section />
            <Show when=move || expanded.get()>
                <form class="wizard-section__form" on:submit=on_submit>
                    <div class="amenities-grid">
                        {amenities_list
                            .clone()
                            .into_iter()
                            .map(|amenity| {
                                let id = amenity.clone();
                                let toggle_id = amenity.clone();
                                view! {
                                    <label class="amenities-grid__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || draft.with(|d| d.is_selected(&id))
                                            on:change=move |_| {
                                                draft.update(|d| {
                                                    d.toggle(&toggle_id);
                                                });
                                            }
                                        />
                                        <span>{amenity_label(&amenity)}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="amenities-grid__count">{move || format!("{} selected", selected_count())}</p>
                    <button class="btn wizard-section__save" type="submit">"Save"</button>
                </form>
            </Show>
        </section>
    }
}
