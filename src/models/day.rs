//! Calendar day models.
//!
//! This module contains the [`Day`] record produced by the day classifier,
//! along with the [`Holiday`] and [`EmployerDayOff`] input types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday supplied to the engine.
///
/// Holiday data is resolved by an external provider (network-backed in
/// production, a static list in tests) before the engine runs. Dates are
/// calendar dates with no time-of-day component, so equality checks are
/// always date-only.
///
/// # Example
///
/// ```
/// use pto_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "New Year's Day").
    pub name: String,
}

/// An employer-designated day off (e.g., a company-wide closure day).
///
/// Treated like a public holiday by the classifier: the day is off without
/// spending PTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerDayOff {
    /// The date of the employer day off.
    pub date: NaiveDate,
    /// The name of the day off (e.g., "Company Retreat").
    pub name: String,
}

/// One classified calendar day within the planning window.
///
/// Created fresh by the day classifier for each optimization run and
/// discarded afterwards; never persisted. The `is_pto` flag is set only by
/// the selector's output projection and is never true for a day that is
/// already off (spending PTO on a weekend or holiday is forbidden by
/// construction).
///
/// # Example
///
/// ```
/// use pto_engine::models::Day;
/// use chrono::NaiveDate;
///
/// // 2026-01-03 is a Saturday
/// let day = Day::new(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());
/// assert!(day.is_weekend);
/// assert!(day.is_off());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// The calendar date. Unique key within a planning window.
    pub date: NaiveDate,
    /// Whether the date falls on a Saturday or Sunday.
    pub is_weekend: bool,
    /// Whether the date is a public holiday.
    pub is_public_holiday: bool,
    /// The name of the public holiday, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// Whether the date is an employer-designated day off.
    pub is_employer_day_off: bool,
    /// The name of the employer day off, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_day_off_name: Option<String>,
    /// Whether a PTO day is spent on this date. Set by the selector's
    /// output projection only.
    pub is_pto: bool,
    /// Whether this date falls inside a selected break.
    pub is_part_of_break: bool,
}

impl Day {
    /// Creates a fresh day record for a date, with the weekend flag derived
    /// from the weekday and all other flags cleared.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_weekend: crate::optimizer::is_weekend(date),
            is_public_holiday: false,
            holiday_name: None,
            is_employer_day_off: false,
            employer_day_off_name: None,
            is_pto: false,
            is_part_of_break: false,
        }
    }

    /// Whether this day counts toward "days off".
    ///
    /// A day is off if it is a weekend, a public holiday, an employer day
    /// off, or a spent PTO day.
    pub fn is_off(&self) -> bool {
        self.is_weekend || self.is_public_holiday || self.is_employer_day_off || self.is_pto
    }
}
