//! Calendar week computation.
//!
//! A week always runs Monday through Sunday. The window for a reference
//! date is derived arithmetically, so navigating between weeks is just a
//! matter of shifting the reference date by whole weeks and recomputing.

use chrono::{Datelike, Duration, NaiveDate};

/// Number of days in a rendered week window.
pub const WEEK_DAYS: usize = 7;

/// Returns the seven dates [Monday..Sunday] of the week containing
/// `reference`.
pub fn week_window(reference: NaiveDate) -> [NaiveDate; WEEK_DAYS] {
    let offset = reference.weekday().num_days_from_monday() as i64;
    let monday = reference - Duration::days(offset);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Shifts a reference date by whole weeks, for previous/next navigation.
pub fn shift_weeks(reference: NaiveDate, offset: i64) -> NaiveDate {
    reference + Duration::weeks(offset)
}

/// Human-readable date range of a week window, e.g.
/// "05 Jan 2026 - 11 Jan 2026".
pub fn week_range_label(window: &[NaiveDate; WEEK_DAYS]) -> String {
    format!(
        "{} - {}",
        window[0].format("%d %b %Y"),
        window[WEEK_DAYS - 1].format("%d %b %Y")
    )
}
