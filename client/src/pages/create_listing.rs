//! Create-listing page: the six wizard sections plus the submit footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the only shared wizard state, a `RwSignal<ListingWizard>`.
//! Sections receive a snapshot of the draft at mount and report back through
//! `update_form_data`; the page alone talks to the network (`POST /listings`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use marketplace::{ListingWizard, SectionKey, SectionSlice};

use crate::components::amenities::Amenities;
use crate::components::basic_information::BasicInformation;
use crate::components::details::PropertyDetails;
use crate::components::legal_information::LegalInformation;
use crate::components::location::LocationSection;
use crate::components::pricing::Pricing;
use crate::components::submit_section::SubmitSection;

#[component]
pub fn CreateListingPage() -> impl IntoView {
    let wizard = RwSignal::new(ListingWizard::default());
    let navigate = use_navigate();

    let snapshot = wizard.with_untracked(|w| w.draft().clone());
    let update_form_data =
        Callback::new(move |slice: SectionSlice| wizard.update(|w| w.update_form_data(slice)));
    let expanded = move |key: SectionKey| Signal::derive(move || wizard.with(|w| w.is_expanded(key)));
    let toggle = move |key: SectionKey| {
        Callback::new(move |()| {
            wizard.update(|w| {
                w.toggle_section(key);
            });
        })
    };

    let completed = Signal::derive(move || wizard.with(ListingWizard::completed_count));
    let is_submitting = Signal::derive(move || wizard.with(ListingWizard::is_submitting));
    let error = Signal::derive(move || wizard.with(|w| w.error().map(str::to_owned)));

    // Set once the page should return to the dashboard.
    let leave = RwSignal::new(false);
    Effect::new(move || {
        if leave.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |()| {
        let Some(Ok(body)) = wizard.try_update(ListingWizard::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_listing(&body).await.map(|_| ());
            let created = result.is_ok();
            wizard.update(|w| w.finish_submit(result));
            if created {
                leave.set(true);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            wizard.update(|w| w.finish_submit(Err("not available on server".to_owned())));
        }
    });

    let on_cancel = Callback::new(move |()| {
        wizard.update(ListingWizard::abandon);
        leave.set(true);
    });

    view! {
        <div class="create-listing-page">
            <h1>"Create a new listing"</h1>
            <BasicInformation
                initial_data=snapshot.clone()
                update_form_data=update_form_data
                expanded=expanded(SectionKey::Basic)
                toggle_section=toggle(SectionKey::Basic)
            />
            <Amenities
                initial_data=snapshot.clone()
                update_form_data=update_form_data
                expanded=expanded(SectionKey::Amenities)
                toggle_section=toggle(SectionKey::Amenities)
            />
            <PropertyDetails
                initial_data=snapshot.clone()
                update_form_data=update_form_data
                expanded=expanded(SectionKey::Details)
                toggle_section=toggle(SectionKey::Details)
            />
            <LocationSection
                initial_data=snapshot.clone()
                update_form_data=update_form_data
                expanded=expanded(SectionKey::Location)
                toggle_section=toggle(SectionKey::Location)
            />
            <Pricing
                initial_data=snapshot.clone()
                update_form_data=update_form_data
                expanded=expanded(SectionKey::Pricing)
                toggle_section=toggle(SectionKey::Pricing)
            />
            <LegalInformation
                initial_data=snapshot
                update_form_data=update_form_data
                expanded=expanded(SectionKey::Legal)
                toggle_section=toggle(SectionKey::Legal)
            />
            <SubmitSection
                completed=completed
                is_submitting=is_submitting
                error=error
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </div>
    }
}
