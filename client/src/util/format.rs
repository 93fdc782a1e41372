//! Display formatting for money, dates, and counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDate;

/// US-dollar amount with thousands separators and cents, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Long date, e.g. `Mon, Nov 2, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Rate already expressed in percent, rounded to whole numbers.
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.0}%")
}

/// Average rating with one decimal, or `"New"` when there are no ratings.
pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "New".to_owned(), |r| format!("{r:.1}"))
}

/// `"1 night"`, `"3 nights"`.
pub fn pluralize(count: i64, singular: &str) -> String {
    if count == 1 { format!("1 {singular}") } else { format!("{count} {singular}s") }
}
