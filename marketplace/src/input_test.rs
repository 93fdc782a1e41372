use super::*;

#[test]
fn parse_clamped_u32_accepts_values_in_range() {
    assert_eq!(parse_clamped_u32("4", 1, 20), Some(4));
    assert_eq!(parse_clamped_u32(" 7 ", 0, u32::MAX), Some(7));
}

#[test]
fn parse_clamped_u32_clamps_out_of_range_values() {
    assert_eq!(parse_clamped_u32("0", 1, 20), Some(1));
    assert_eq!(parse_clamped_u32("35", 1, 20), Some(20));
    assert_eq!(parse_clamped_u32("-3", 0, u32::MAX), Some(0));
}

#[test]
fn parse_clamped_u32_rejects_non_integers() {
    assert_eq!(parse_clamped_u32("", 0, 10), None);
    assert_eq!(parse_clamped_u32("2.5", 0, 10), None);
    assert_eq!(parse_clamped_u32("abc", 0, 10), None);
}

#[test]
fn parse_half_step_snaps_down_to_half() {
    assert_eq!(parse_half_step("2.5", 0.5, 50.0), Some(2.5));
    assert_eq!(parse_half_step("2.7", 0.5, 50.0), Some(2.5));
    assert_eq!(parse_half_step("3", 0.5, 50.0), Some(3.0));
}

#[test]
fn parse_half_step_clamps_and_rejects_garbage() {
    assert_eq!(parse_half_step("0", 0.5, 50.0), Some(0.5));
    assert_eq!(parse_half_step("0.2", 0.5, 50.0), Some(0.5));
    assert_eq!(parse_half_step("NaN", 0.5, 50.0), None);
    assert_eq!(parse_half_step("two", 0.5, 50.0), None);
}
