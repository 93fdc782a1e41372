use super::*;
use crate::basic::BasicInfoSlice;
use crate::legal::LegalSlice;
use crate::location::{Location, LocationSlice};
use crate::pricing::PricingSlice;

fn basic() -> SectionSlice {
    SectionSlice::Basic(BasicInfoSlice { title: "Cottage".to_owned(), ..BasicInfoSlice::default() })
}

fn location() -> SectionSlice {
    SectionSlice::Location(LocationSlice {
        location: Location {
            address: "3 Mill Lane".to_owned(),
            city: "Bath".to_owned(),
            country: "UK".to_owned(),
            ..Location::default()
        },
    })
}

fn pricing() -> SectionSlice {
    SectionSlice::Pricing(PricingSlice { price: 140, ..PricingSlice::default() })
}

fn ready_wizard() -> ListingWizard {
    let mut wizard = ListingWizard::default();
    wizard.update_form_data(basic());
    wizard.update_form_data(location());
    wizard.update_form_data(pricing());
    wizard
}

#[test]
fn default_wizard_opens_basic_section_only() {
    let wizard = ListingWizard::default();
    assert!(wizard.is_expanded(SectionKey::Basic));
    assert!(!wizard.is_expanded(SectionKey::Pricing));
    assert!(!wizard.is_submitting());
    assert!(wizard.error().is_none());
    assert_eq!(wizard.completed_count(), 0);
}

#[test]
fn sections_toggle_independently() {
    let mut wizard = ListingWizard::default();
    wizard.toggle_section(SectionKey::Legal);
    wizard.toggle_section(SectionKey::Details);
    assert!(wizard.is_expanded(SectionKey::Basic));
    assert!(wizard.is_expanded(SectionKey::Legal));
    assert!(wizard.is_expanded(SectionKey::Details));
    wizard.toggle_section(SectionKey::Legal);
    assert!(!wizard.is_expanded(SectionKey::Legal));
    assert!(wizard.is_expanded(SectionKey::Details));
}

#[test]
fn repeated_reports_overwrite_without_growing() {
    let mut wizard = ListingWizard::default();
    wizard.update_form_data(pricing());
    wizard.update_form_data(SectionSlice::Pricing(PricingSlice { price: 99, ..PricingSlice::default() }));
    assert_eq!(wizard.completed_count(), 1);
    assert_eq!(wizard.draft().pricing().unwrap().price, 99);
}

#[test]
fn submit_requires_basic_location_and_pricing() {
    let mut wizard = ListingWizard::default();
    wizard.update_form_data(location());
    let err = wizard.begin_submit().unwrap_err();
    assert_eq!(err, SubmitError::MissingSection(SectionKey::Basic));
    assert_eq!(wizard.error(), Some("Please complete the Basic Information section before submitting"));
    assert!(!wizard.is_submitting());

    wizard.update_form_data(basic());
    assert_eq!(wizard.begin_submit().unwrap_err(), SubmitError::MissingSection(SectionKey::Pricing));
}

#[test]
fn begin_submit_returns_draft_and_blocks_reentry() {
    let mut wizard = ready_wizard();
    let body = wizard.begin_submit().unwrap();
    assert_eq!(&body, wizard.draft());
    assert!(wizard.is_submitting());
    assert!(wizard.error().is_none());
    assert_eq!(wizard.begin_submit().unwrap_err(), SubmitError::AlreadySubmitting);
}

#[test]
fn successful_submit_resets_draft() {
    let mut wizard = ready_wizard();
    wizard.begin_submit().unwrap();
    wizard.finish_submit(Ok(()));
    assert!(!wizard.is_submitting());
    assert!(wizard.draft().is_empty());
}

#[test]
fn failed_submit_keeps_draft_and_shows_error() {
    let mut wizard = ready_wizard();
    wizard.begin_submit().unwrap();
    wizard.finish_submit(Err("create listing failed: 500".to_owned()));
    assert!(!wizard.is_submitting());
    assert_eq!(wizard.error(), Some("create listing failed: 500"));
    assert_eq!(wizard.completed_count(), 3);
}

#[test]
fn abandon_restores_initial_state() {
    let mut wizard = ready_wizard();
    wizard.toggle_section(SectionKey::Pricing);
    wizard.update_form_data(SectionSlice::Legal(LegalSlice::default()));
    wizard.abandon();
    assert_eq!(wizard, ListingWizard::default());
}

#[test]
fn legal_empty_report_is_distinct_from_not_submitted() {
    let mut submitted = ListingWizard::default();
    submitted.update_form_data(SectionSlice::Legal(LegalSlice::default()));
    let untouched = ListingWizard::default();

    assert_ne!(submitted.draft(), untouched.draft());
    assert!(submitted.draft().is_submitted(SectionKey::Legal));
    assert!(!untouched.draft().is_submitted(SectionKey::Legal));
}
