//! Bridge day candidates.
//!
//! A bridge day is a single workday sandwiched between two days that are
//! already off. Converting it costs one PTO day and joins the surrounding
//! off-day runs, so these candidates carry the highest efficiency the
//! engine can produce (3.0 and up).

use crate::models::{Period, PeriodKind};

use super::GeneratorContext;

/// Enumerates one candidate per bridge day in the planning window.
///
/// The candidate spans the full off-day run on either side of the bridge,
/// not just the three inner days, since the adjacent off days cost
/// nothing.
pub fn generate(ctx: &GeneratorContext) -> Vec<Period> {
    let mut candidates = Vec::new();

    let mut current = ctx.window_start();
    let end = ctx.window_end();
    while current <= end {
        if !ctx.is_day_off(current) {
            if let (Some(prev), Some(next)) = (current.pred_opt(), current.succ_opt()) {
                if ctx.is_day_off(prev) && ctx.is_day_off(next) {
                    let (start, stop) = ctx.extend_over_off_days(prev, next, 3);
                    candidates.push(ctx.period(start, stop, PeriodKind::Bridge));
                }
            }
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
    use crate::models::Holiday;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_friday_after_thursday_holiday_is_a_bridge() {
        // 2026-01-01 is a Thursday
        let holidays = vec![Holiday {
            date: make_date("2026-01-01"),
            name: "New Year's Day".to_string(),
        }];
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &holidays, &[]);

        let candidates = generate(&ctx);
        let bridge = candidates
            .iter()
            .find(|c| c.contains(make_date("2026-01-02")))
            .expect("expected a bridge over Friday 2026-01-02");

        assert_eq!(bridge.kind, PeriodKind::Bridge);
        assert_eq!(bridge.pto_days_needed, 1);
        // Thu (holiday) + Fri (PTO) + Sat + Sun
        assert_eq!(bridge.start, make_date("2026-01-01"));
        assert_eq!(bridge.end, make_date("2026-01-04"));
        assert!(bridge.efficiency() >= 3.0);
    }

    #[test]
    fn test_no_bridges_without_holidays() {
        // Plain weekends never sandwich a single workday.
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &[]);
        assert!(generate(&ctx).is_empty());
    }

    #[test]
    fn test_monday_before_tuesday_holiday_is_a_bridge() {
        // 2026-05-05 is a Tuesday; Monday 05-04 sits between Sunday and it.
        let holidays = vec![Holiday {
            date: make_date("2026-05-05"),
            name: "Test Holiday".to_string(),
        }];
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &holidays, &[]);

        let candidates = generate(&ctx);
        let bridge = candidates
            .iter()
            .find(|c| c.contains(make_date("2026-05-04")))
            .expect("expected a bridge over Monday 2026-05-04");

        assert_eq!(bridge.pto_days_needed, 1);
        // Sat + Sun + Mon (PTO) + Tue (holiday)
        assert_eq!(bridge.start, make_date("2026-05-02"));
        assert_eq!(bridge.end, make_date("2026-05-05"));
    }

    #[test]
    fn test_employer_day_off_creates_bridge() {
        // 2026-06-11 is a Thursday closure; Friday 06-12 becomes a bridge.
        let employer = vec![crate::models::EmployerDayOff {
            date: make_date("2026-06-11"),
            name: "Company Closure".to_string(),
        }];
        let ctx = GeneratorContext::new(2026, make_date("2026-01-01"), &[], &employer);

        let candidates = generate(&ctx);
        assert!(candidates.iter().any(|c| c.contains(make_date("2026-06-12"))));
    }
}
