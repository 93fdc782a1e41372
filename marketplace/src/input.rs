//! Parsing for numeric form inputs.
//!
//! Inputs arrive as raw text on every keystroke. Text that does not parse
//! leaves the previous value in place; parsed values are clamped into the
//! field's range.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Parse an integer field and clamp it into `min..=max`.
pub(crate) fn parse_clamped_u32(raw: &str, min: u32, max: u32) -> Option<u32> {
    let value = raw.trim().parse::<i64>().ok()?;
    let clamped = value.clamp(i64::from(min), i64::from(max));
    u32::try_from(clamped).ok()
}

/// Parse a half-step decimal field (e.g. bathrooms), clamp it, and snap it
/// down to the nearest 0.5.
pub(crate) fn parse_half_step(raw: &str, min: f64, max: f64) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    let snapped = (value.clamp(min, max) * 2.0).floor() / 2.0;
    Some(snapped.max(min))
}
