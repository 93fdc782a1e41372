use super::*;

#[test]
fn submit_without_price_is_rejected() {
    let mut draft = PricingDraft::seed(&ListingDraft::default());
    assert!(draft.submit().is_none());
    assert_eq!(draft.error(), Some("Price per night must be at least 1"));
}

#[test]
fn submit_reports_camel_case_fields() {
    let mut draft = PricingDraft::default();
    draft.set_price("120");
    draft.set_cleaning_fee("35");
    draft.set_security_deposit("200");
    draft.set_weekly_discount("10");
    draft.set_monthly_discount("25");

    let slice = draft.submit().unwrap();
    assert!(draft.error().is_none());
    assert_eq!(
        serde_json::to_value(&slice).unwrap(),
        serde_json::json!({
            "price": 120,
            "cleaningFee": 35,
            "securityDeposit": 200,
            "weeklyDiscount": 10,
            "monthlyDiscount": 25
        })
    );
}

#[test]
fn discounts_are_capped_at_fifty_percent() {
    let mut draft = PricingDraft::default();
    draft.set_weekly_discount("80");
    draft.set_monthly_discount("-5");
    assert_eq!(draft.values().weekly_discount, 50);
    assert_eq!(draft.values().monthly_discount, 0);
}

#[test]
fn weekly_discount_may_exceed_monthly() {
    let mut draft = PricingDraft::default();
    draft.set_price("90");
    draft.set_weekly_discount("40");
    draft.set_monthly_discount("5");
    assert!(draft.submit().is_some());
}

#[test]
fn fractional_price_input_is_ignored() {
    let mut draft = PricingDraft::default();
    draft.set_price("80");
    draft.set_price("80.5");
    assert_eq!(draft.values().price, 80);
}

#[test]
fn successful_submit_clears_error() {
    let mut draft = PricingDraft::default();
    assert!(draft.submit().is_none());
    draft.set_price("1");
    assert!(draft.submit().is_some());
    assert!(draft.error().is_none());
}
