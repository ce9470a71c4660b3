//! Distributed mini-break candidates.
//!
//! Short 2–6 day windows seeded roughly every seven days in every month of
//! the year. These guarantee candidate coverage even in months without a
//! single holiday, so the selector always has something small to spend
//! remaining budget on.

use chrono::{Duration, NaiveDate};

use crate::models::{Period, PeriodKind};

use super::GeneratorContext;

/// Days of the month used as seeds, roughly one per week.
const SEED_DAYS: &[u32] = &[1, 8, 15, 22];

/// Deterministic window length in 2..=6 for a given seed position.
fn window_length(month: u32, seed_day: u32) -> i64 {
    i64::from(2 + (month + seed_day / 7) % 5)
}

/// Enumerates 2–6 day windows across every month of the year.
pub fn generate(ctx: &GeneratorContext) -> Vec<Period> {
    let mut candidates = Vec::new();

    for month in 1..=12u32 {
        for &seed_day in SEED_DAYS {
            let Some(start) = NaiveDate::from_ymd_opt(ctx.year, month, seed_day) else {
                continue;
            };
            let len = window_length(month, seed_day);
            let end = start + Duration::days(len - 1);
            let kind = if len <= 3 {
                PeriodKind::Single
            } else {
                PeriodKind::Strategic
            };
            candidates.push(ctx.period(start, end, kind));
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_every_month_is_covered() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        let candidates = generate(&ctx);
        for month in 1..=12u32 {
            assert!(
                candidates.iter().any(|c| {
                    use chrono::Datelike;
                    c.start.month() == month
                }),
                "no mini-break seeded in month {month}"
            );
        }
    }

    #[test]
    fn test_window_lengths_stay_within_two_to_six_days() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        let candidates = generate(&ctx);
        assert!(candidates.iter().all(|c| (2..=6).contains(&c.total_days)));
    }

    #[test]
    fn test_kinds_split_by_length() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        for c in generate(&ctx) {
            if c.total_days <= 3 {
                assert_eq!(c.kind, PeriodKind::Single);
            } else {
                assert_eq!(c.kind, PeriodKind::Strategic);
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        assert_eq!(generate(&ctx), generate(&ctx));
    }

    #[test]
    fn test_four_seeds_per_month() {
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        let candidates = generate(&ctx);
        assert_eq!(candidates.len(), 12 * SEED_DAYS.len());
    }
}
