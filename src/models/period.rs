//! Time-off period models.
//!
//! A [`Period`] is a contiguous date range considered as one unit of time
//! off. Candidates are created by the generators, re-scored into new values
//! by the scorer, and kept or discarded by the selector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The family a candidate period belongs to.
///
/// Informational: used for descriptions and for the scorer's strategy
/// matching. Does not affect the exact-budget arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// A single workday sandwiched between two days already off.
    Bridge,
    /// A Thursday→Sunday or Friday→Monday window around a weekend.
    ExtendedWeekend,
    /// A Monday-start seven-day window.
    Week,
    /// A multi-week window (14 or 21 days).
    Extended,
    /// A short window of one or two workdays.
    Single,
    /// A distributed mini-break seeded for month coverage.
    Strategic,
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodKind::Bridge => write!(f, "bridge"),
            PeriodKind::ExtendedWeekend => write!(f, "extended_weekend"),
            PeriodKind::Week => write!(f, "week"),
            PeriodKind::Extended => write!(f, "extended"),
            PeriodKind::Single => write!(f, "single"),
            PeriodKind::Strategic => write!(f, "strategic"),
        }
    }
}

/// A contiguous date range considered as a unit of time off.
///
/// Invariants: `start <= end`, `total_days == end - start + 1`, and
/// `pto_days_needed` is always recomputed from the day classifier's
/// predicate over `[start, end]`, since it is the quantity the exact-sum
/// constraint is built on.
///
/// Periods are immutable once created; the scorer returns new values with
/// the score populated rather than mutating in place, so the selector's
/// passes stay free of order-dependent side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// The first date of the period (inclusive).
    pub start: NaiveDate,
    /// The last date of the period (inclusive).
    pub end: NaiveDate,
    /// The length of the period in calendar days.
    pub total_days: u32,
    /// The count of days in range that are not already off.
    pub pto_days_needed: u32,
    /// The candidate family this period belongs to.
    pub kind: PeriodKind,
    /// Strategy-dependent desirability score. Zero until the scorer runs.
    pub score: f64,
}

impl Period {
    /// The efficiency ratio: total days off per PTO day consumed.
    ///
    /// A zero-cost period is treated as costing one day so the ratio stays
    /// finite.
    ///
    /// # Example
    ///
    /// ```
    /// use pto_engine::models::{Period, PeriodKind};
    /// use chrono::NaiveDate;
    ///
    /// let period = Period {
    ///     start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
    ///     total_days: 4,
    ///     pto_days_needed: 2,
    ///     kind: PeriodKind::ExtendedWeekend,
    ///     score: 0.0,
    /// };
    /// assert_eq!(period.efficiency(), 2.0);
    /// ```
    pub fn efficiency(&self) -> f64 {
        f64::from(self.total_days) / f64::from(self.pto_days_needed.max(1))
    }

    /// Whether this period's date range intersects another's.
    pub fn overlaps(&self, other: &Period) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether a date falls within this period (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_period(start: &str, end: &str, pto: u32) -> Period {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap();
        Period {
            start,
            end,
            total_days: (end - start).num_days() as u32 + 1,
            pto_days_needed: pto,
            kind: PeriodKind::Week,
            score: 0.0,
        }
    }

    #[test]
    fn test_efficiency_divides_total_by_pto() {
        let period = make_period("2026-04-02", "2026-04-06", 2);
        assert_eq!(period.efficiency(), 2.5);
    }

    #[test]
    fn test_efficiency_with_zero_pto_stays_finite() {
        let period = make_period("2026-04-04", "2026-04-05", 0);
        assert_eq!(period.efficiency(), 2.0);
    }

    #[test]
    fn test_overlapping_periods_detected() {
        let a = make_period("2026-04-02", "2026-04-06", 2);
        let b = make_period("2026-04-06", "2026-04-10", 3);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_adjacent_periods_do_not_overlap() {
        let a = make_period("2026-04-02", "2026-04-06", 2);
        let b = make_period("2026-04-07", "2026-04-10", 3);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contains_is_inclusive_of_both_ends() {
        let period = make_period("2026-04-02", "2026-04-06", 2);
        assert!(period.contains(period.start));
        assert!(period.contains(period.end));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 4, 7).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
    }

    #[test]
    fn test_period_kind_display() {
        assert_eq!(format!("{}", PeriodKind::Bridge), "bridge");
        assert_eq!(format!("{}", PeriodKind::ExtendedWeekend), "extended_weekend");
        assert_eq!(format!("{}", PeriodKind::Strategic), "strategic");
    }

    #[test]
    fn test_period_kind_serializes_snake_case() {
        let json = serde_json::to_string(&PeriodKind::ExtendedWeekend).unwrap();
        assert_eq!(json, "\"extended_weekend\"");
    }

    #[test]
    fn test_period_serializes_camel_case() {
        let period = make_period("2026-04-02", "2026-04-06", 2);
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"totalDays\":5"));
        assert!(json.contains("\"ptoDaysNeeded\":2"));
    }
}
