use super::*;

#[test]
fn all_blank_reports_empty_object() {
    let mut draft = LegalDraft::default();
    let slice = draft.submit().unwrap();
    assert_eq!(serde_json::to_value(&slice).unwrap(), serde_json::json!({}));
}

#[test]
fn whitespace_only_field_is_reported_as_typed() {
    let mut draft = LegalDraft { license_number: " ".to_owned(), ..LegalDraft::default() };
    let slice = draft.submit().unwrap();
    assert_eq!(
        serde_json::to_value(&slice).unwrap(),
        serde_json::json!({ "license": { "number": " ", "type": "", "expiryDate": "" } })
    );
}

#[test]
fn single_filled_field_reports_license_with_empty_siblings() {
    let mut draft = LegalDraft { license_number: "STR-2024-0042".to_owned(), ..LegalDraft::default() };
    let slice = draft.submit().unwrap();
    assert_eq!(
        serde_json::to_value(&slice).unwrap(),
        serde_json::json!({
            "license": { "number": "STR-2024-0042", "type": "", "expiryDate": "" }
        })
    );

    let mut draft = LegalDraft { expiry_date: "2026-12-31".to_owned(), ..LegalDraft::default() };
    let slice = draft.submit().unwrap();
    assert_eq!(
        serde_json::to_value(&slice).unwrap(),
        serde_json::json!({
            "license": { "number": "", "type": "", "expiryDate": "2026-12-31" }
        })
    );
}

#[test]
fn empty_report_still_marks_section_submitted() {
    let mut aggregate = ListingDraft::default();
    assert!(!aggregate.is_submitted(SectionKey::Legal));

    let slice = LegalDraft::default().submit().unwrap();
    aggregate.merge(slice);
    assert!(aggregate.is_submitted(SectionKey::Legal));
    assert_eq!(aggregate.legal(), Some(&LegalSlice { license: None }));
}

#[test]
fn seed_restores_license_fields() {
    let mut aggregate = ListingDraft::default();
    aggregate.merge(SectionSlice::Legal(LegalSlice {
        license: Some(License {
            number: "A-1".to_owned(),
            license_type: "municipal".to_owned(),
            expiry_date: "2027-01-01".to_owned(),
        }),
    }));
    let draft = LegalDraft::seed(&aggregate);
    assert_eq!(draft.license_number, "A-1");
    assert_eq!(draft.license_type, "municipal");
    assert_eq!(draft.expiry_date, "2027-01-01");
}
