//! Plan-level statistics.

use crate::models::{Day, Period, Stats};

/// Day-count range for a break to count as an extended weekend.
const EXTENDED_WEEKEND_DAYS: std::ops::RangeInclusive<u32> = 3..=4;

/// Aggregates totals across the classified calendar and the selected
/// breaks.
///
/// Day-level counters cover the whole planning window in a single walk,
/// so holidays and weekends outside any selected break still count; the
/// extended-weekend counter comes from the break lengths themselves.
pub fn aggregate(days: &[Day], selected: &[Period]) -> Stats {
    let mut stats = Stats::default();

    for day in days {
        if day.is_pto {
            stats.total_pto_days += 1;
        }
        if day.is_public_holiday {
            stats.total_public_holidays += 1;
        }
        if day.is_employer_day_off {
            stats.total_employer_days_off += 1;
        }
        if day.is_off() {
            stats.total_days_off += 1;
        }
    }

    stats.total_extended_weekends = selected
        .iter()
        .filter(|p| EXTENDED_WEEKEND_DAYS.contains(&p.total_days))
        .count() as u32;

    stats
}
