//! Day classification logic.
//!
//! This module produces the per-day record array for a planning window and
//! exposes the single day-off predicate reused by every other component,
//! so that "day off" semantics are defined exactly once.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{Day, EmployerDayOff, Holiday};

/// Whether a date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use pto_engine::optimizer::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2026-01-03 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()));
/// // 2026-01-05 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The shared day-off predicate.
///
/// A date is off if it is a weekend, matches a public holiday, or matches
/// an employer day off. Matching is by exact calendar date; the inputs
/// carry no time-of-day component, so there is nothing to normalize away.
///
/// Empty holiday and employer lists are valid and degrade gracefully to
/// weekend-only semantics.
pub fn is_day_off(date: NaiveDate, holidays: &[Holiday], employer_days_off: &[EmployerDayOff]) -> bool {
    is_weekend(date)
        || holidays.iter().any(|h| h.date == date)
        || employer_days_off.iter().any(|d| d.date == date)
}

/// Classifies every day of the planning window.
///
/// Returns one [`Day`] per date from `max(today, Jan 1 of year)` through
/// December 31 of `year`, ordered chronologically. Returns an empty vector
/// if the year has already fully elapsed.
///
/// # Arguments
///
/// * `year` - The target year
/// * `today` - The current date; days before it are excluded
/// * `holidays` - Public holidays to tag
/// * `employer_days_off` - Employer-designated days off to tag
pub fn classify(
    year: i32,
    today: NaiveDate,
    holidays: &[Holiday],
    employer_days_off: &[EmployerDayOff],
) -> Vec<Day> {
    let Some(jan_first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    let Some(dec_last) = NaiveDate::from_ymd_opt(year, 12, 31) else {
        return Vec::new();
    };

    let start = jan_first.max(today);
    if start > dec_last {
        return Vec::new();
    }

    let mut days = Vec::with_capacity((dec_last - start).num_days() as usize + 1);
    let mut current = start;
    while current <= dec_last {
        let mut day = Day::new(current);
        if let Some(holiday) = holidays.iter().find(|h| h.date == current) {
            day.is_public_holiday = true;
            day.holiday_name = Some(holiday.name.clone());
        }
        if let Some(off) = employer_days_off.iter().find(|d| d.date == current) {
            day.is_employer_day_off = true;
            day.employer_day_off_name = Some(off.name.clone());
        }
        days.push(day);

        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    days
}
