//! Pricing section: nightly price, fees, and long-stay discounts.

use leptos::prelude::*;
use marketplace::pricing::{MAX_DISCOUNT_PERCENT, MIN_PRICE, PricingDraft};
use marketplace::{ListingDraft, SectionForm, SectionKey, SectionSlice};

use crate::components::section_header::{SectionError, SectionHeader, report_section};

#[component]
pub fn Pricing(
    initial_data: ListingDraft,
    update_form_data: Callback<SectionSlice>,
    #[prop(into)] expanded: Signal<bool>,
    toggle_section: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(PricingDraft::seed(&initial_data));
    let error = Signal::derive(move || draft.with(|d| d.error().map(str::to_owned)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        report_section(draft, update_form_data);
    };

    view! {
        <section class="wizard-section">
            <SectionHeader section=SectionKey::Pricing expanded=expanded toggle_section=toggle_section />
            <Show when=move || expanded.get()>
                <form class="wizard-section__form wizard-section__form--grid" on:submit=on_submit>
                    <SectionError error=error />
                    <label class="wizard-field">
                        "Price per night ($) *"
                        <input
                            type="number"
                            min=MIN_PRICE
                            prop:value=move || draft.with(|d| d.values().price.to_string())
                            on:input=move |ev| draft.update(|d| d.set_price(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Cleaning fee ($)"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.values().cleaning_fee.to_string())
                            on:input=move |ev| draft.update(|d| d.set_cleaning_fee(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Security deposit ($)"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.values().security_deposit.to_string())
                            on:input=move |ev| draft.update(|d| d.set_security_deposit(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Weekly discount (%)"
                        <input
                            type="number"
                            min="0"
                            max=MAX_DISCOUNT_PERCENT
                            prop:value=move || draft.with(|d| d.values().weekly_discount.to_string())
                            on:input=move |ev| draft.update(|d| d.set_weekly_discount(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="wizard-field">
                        "Monthly discount (%)"
                        <input
                            type="number"
                            min="0"
                            max=MAX_DISCOUNT_PERCENT
                            prop:value=move || draft.with(|d| d.values().monthly_discount.to_string())
                            on:input=move |ev| draft.update(|d| d.set_monthly_discount(&event_target_value(&ev)))
                        />
                    </label>
                    <button class="btn wizard-section__save" type="submit">"Save"</button>
                </form>
            </Show>
        </section>
    }
}
