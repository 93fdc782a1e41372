use super::*;
use crate::amenities::AmenitiesDraft;
use crate::details::DetailsDraft;
use crate::legal::License;
use crate::location::{Location, LocationDraft};
use crate::section::SectionKey;

fn location_slice(city: &str) -> SectionSlice {
    SectionSlice::Location(LocationSlice {
        location: Location {
            address: "10 Market Street".to_owned(),
            city: city.to_owned(),
            country: "Ireland".to_owned(),
            ..Location::default()
        },
    })
}

fn pricing_slice(price: u32) -> SectionSlice {
    SectionSlice::Pricing(PricingSlice { price, ..PricingSlice::default() })
}

// =============================================================
// merge
// =============================================================

#[test]
fn new_draft_has_no_sections() {
    let draft = ListingDraft::default();
    assert!(draft.is_empty());
    assert!(SectionKey::ALL.iter().all(|k| !draft.is_submitted(*k)));
    assert_eq!(serde_json::to_value(&draft).unwrap(), serde_json::json!({}));
}

#[test]
fn merge_fills_only_the_reported_slot() {
    let mut draft = ListingDraft::default();
    draft.merge(pricing_slice(80));
    assert_eq!(draft.submitted_sections(), [SectionKey::Pricing]);
    assert!(draft.details().is_none());
}

#[test]
fn later_report_replaces_earlier_one() {
    let mut draft = ListingDraft::default();
    draft.merge(location_slice("Cork"));
    draft.merge(location_slice("Galway"));
    assert_eq!(draft.location().unwrap().location.city, "Galway");
    assert_eq!(draft.submitted_sections(), [SectionKey::Location]);
}

#[test]
fn merge_order_does_not_matter() {
    let mut a = ListingDraft::default();
    a.merge(pricing_slice(50));
    a.merge(location_slice("Cork"));

    let mut b = ListingDraft::default();
    b.merge(location_slice("Cork"));
    b.merge(pricing_slice(50));

    assert_eq!(a, b);
}

#[test]
fn reset_clears_all_sections() {
    let mut draft = ListingDraft::default();
    draft.merge(pricing_slice(50));
    draft.merge(SectionSlice::Legal(LegalSlice::default()));
    draft.reset();
    assert!(draft.is_empty());
}

#[test]
fn slice_key_matches_variant() {
    assert_eq!(pricing_slice(1).key(), SectionKey::Pricing);
    assert_eq!(location_slice("x").key(), SectionKey::Location);
    assert_eq!(SectionSlice::Legal(LegalSlice::default()).key(), SectionKey::Legal);
}

// =============================================================
// serialization
// =============================================================

#[test]
fn serialized_draft_flattens_submitted_slices() {
    let mut draft = ListingDraft::default();
    draft.merge(SectionSlice::Basic(BasicInfoSlice {
        title: "Loft".to_owned(),
        description: "Bright".to_owned(),
        property_type: "loft".to_owned(),
        category: "city".to_owned(),
    }));
    draft.merge(SectionSlice::Amenities(AmenitiesSlice { amenities: vec!["wifi".to_owned()] }));
    draft.merge(pricing_slice(95));
    draft.merge(SectionSlice::Legal(LegalSlice {
        license: Some(License { number: "L-9".to_owned(), ..License::default() }),
    }));

    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({
            "title": "Loft",
            "description": "Bright",
            "propertyType": "loft",
            "category": "city",
            "amenities": ["wifi"],
            "price": 95,
            "cleaningFee": 0,
            "securityDeposit": 0,
            "weeklyDiscount": 0,
            "monthlyDiscount": 0,
            "license": { "number": "L-9", "type": "", "expiryDate": "" }
        })
    );
}

#[test]
fn empty_legal_report_adds_no_keys_but_counts_as_submitted() {
    let mut draft = ListingDraft::default();
    draft.merge(SectionSlice::Legal(LegalSlice::default()));
    assert!(draft.is_submitted(SectionKey::Legal));
    assert_eq!(serde_json::to_value(&draft).unwrap(), serde_json::json!({}));
}

// =============================================================
// seed-once contract
// =============================================================

#[test]
fn section_draft_does_not_observe_later_aggregate_changes() {
    let mut aggregate = ListingDraft::default();
    aggregate.merge(location_slice("Cork"));

    let draft = LocationDraft::seed(&aggregate);
    aggregate.merge(location_slice("Dublin"));

    assert_eq!(draft.city, "Cork");
    assert_eq!(aggregate.location().unwrap().location.city, "Dublin");
}

#[test]
fn details_draft_seeded_before_submission_keeps_defaults() {
    let mut aggregate = ListingDraft::default();
    let draft = DetailsDraft::seed(&aggregate);
    aggregate.merge(SectionSlice::Details(DetailsSlice { guests: 9, bedrooms: 4, beds: 5, bathrooms: 3.0 }));
    assert_eq!(draft.values().guests, 2);
}

#[test]
fn amenities_draft_edits_do_not_touch_aggregate() {
    let mut aggregate = ListingDraft::default();
    aggregate.merge(SectionSlice::Amenities(AmenitiesSlice { amenities: vec!["gym".to_owned()] }));
    let mut draft = AmenitiesDraft::seed(&aggregate);
    draft.toggle("pool");
    assert_eq!(aggregate.amenities().unwrap().amenities, ["gym"]);
}
