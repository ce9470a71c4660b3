//! Week and multi-week window candidates.
//!
//! Monday-start windows of 7, 14, and 21 days distributed across the
//! year. Seven-day windows are seeded on every Monday; the longer windows
//! on every second and fourth Monday so the candidate pool stays
//! proportionate.

use chrono::{Datelike, Duration, Weekday};

use crate::models::{Period, PeriodKind};

use super::GeneratorContext;

/// Enumerates Monday-start 7/14/21-day windows across the planning window.
pub fn generate(ctx: &GeneratorContext) -> Vec<Period> {
    let mut candidates = Vec::new();

    let mut monday_index = 0usize;
    let mut current = ctx.window_start();
    let end = ctx.window_end();
    while current <= end {
        if current.weekday() == Weekday::Mon {
            candidates.push(ctx.period(
                current,
                current + Duration::days(6),
                PeriodKind::Week,
            ));
            if monday_index % 2 == 0 {
                candidates.push(ctx.period(
                    current,
                    current + Duration::days(13),
                    PeriodKind::Extended,
                ));
            }
            if monday_index % 4 == 0 {
                candidates.push(ctx.period(
                    current,
                    current + Duration::days(20),
                    PeriodKind::Extended,
                ));
            }
            monday_index += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_every_window_starts_on_a_monday() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        let candidates = generate(&ctx);
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.start.weekday() == Weekday::Mon));
    }

    #[test]
    fn test_seven_day_window_costs_five_pto_days() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        let candidates = generate(&ctx);
        let week = candidates
            .iter()
            .find(|c| c.start == make_date("2026-01-05") && c.total_days == 7)
            .expect("expected a 7-day window from the first Monday");
        assert_eq!(week.pto_days_needed, 5);
        assert_eq!(week.kind, PeriodKind::Week);
    }

    #[test]
    fn test_multi_week_windows_are_present() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        let candidates = generate(&ctx);
        assert!(candidates.iter().any(|c| c.total_days == 14));
        assert!(candidates.iter().any(|c| c.total_days == 21));
        assert!(
            candidates
                .iter()
                .filter(|c| c.total_days > 7)
                .all(|c| c.kind == PeriodKind::Extended)
        );
    }

    #[test]
    fn test_longer_windows_are_sparser_than_weeks() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        let candidates = generate(&ctx);
        let weeks = candidates.iter().filter(|c| c.total_days == 7).count();
        let fortnights = candidates.iter().filter(|c| c.total_days == 14).count();
        let three_weeks = candidates.iter().filter(|c| c.total_days == 21).count();
        assert!(fortnights < weeks);
        assert!(three_weeks < fortnights);
    }
}
