//! Collapsible header shared by every wizard section.
//!
//! DESIGN
//! ======
//! Sections keep their local draft alive while collapsed; only the form body
//! is hidden. `report_section` is the single place where a section's submit
//! crosses from local state into the aggregate.

use leptos::prelude::*;
use marketplace::{SectionForm, SectionKey, SectionSlice};

/// Clickable section heading. The chevron reflects `expanded`.
#[component]
pub fn SectionHeader(
    section: SectionKey,
    #[prop(into)] expanded: Signal<bool>,
    toggle_section: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="wizard-section__header"
            class:wizard-section__header--open=move || expanded.get()
            aria-expanded=move || if expanded.get() { "true" } else { "false" }
            on:click=move |_| toggle_section.run(())
        >
            <span class="wizard-section__title">{section.label()}</span>
            <span class="wizard-section__chevron" aria-hidden="true">
                {move || if expanded.get() { "▾" } else { "▸" }}
            </span>
        </button>
    }
}

/// Submit the local draft and forward the slice upward when it validates.
pub(crate) fn report_section<D>(draft: RwSignal<D>, update_form_data: Callback<SectionSlice>)
where
    D: SectionForm + Send + Sync + 'static,
{
    if let Some(slice) = draft.try_update(D::submit).flatten() {
        update_form_data.run(slice);
    }
}

/// Inline error paragraph for sections that validate.
#[component]
pub fn SectionError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="wizard-section__error" role="alert">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
