//! Holiday-anchored window candidates.
//!
//! For every public holiday, windows of several lengths positioned before,
//! after, and centered on the holiday, with boundaries snapped onto
//! adjacent off days so a given span costs as little PTO as possible.
//! Holidays falling within five days of each other are additionally merged
//! into a single wider cluster candidate.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Period, PeriodKind};

use super::GeneratorContext;

/// Window lengths tried around each holiday, in days.
const WINDOW_LENGTHS: &[i64] = &[2, 3, 4, 5, 7, 9, 10, 14];

/// Maximum gap, in days, for two holidays to be merged into a cluster.
const CLUSTER_GAP_DAYS: i64 = 5;

fn kind_for_span(total_days: i64) -> PeriodKind {
    match total_days {
        ..=6 => PeriodKind::Strategic,
        7..=9 => PeriodKind::Week,
        _ => PeriodKind::Extended,
    }
}

/// Enumerates before/after/centered windows per holiday plus cluster
/// candidates for adjacent holidays.
pub fn generate(ctx: &GeneratorContext) -> Vec<Period> {
    let mut candidates = Vec::new();

    let mut anchor_dates: Vec<NaiveDate> = ctx
        .holidays
        .iter()
        .map(|h| h.date)
        .filter(|d| d.year() == ctx.year)
        .collect();
    anchor_dates.sort();
    anchor_dates.dedup();

    for &anchor in &anchor_dates {
        for &len in WINDOW_LENGTHS {
            let spans = [
                // Window ending on the holiday
                (anchor - Duration::days(len - 1), anchor),
                // Window starting on the holiday
                (anchor, anchor + Duration::days(len - 1)),
                // Window centered on the holiday
                (
                    anchor - Duration::days(len / 2),
                    anchor - Duration::days(len / 2) + Duration::days(len - 1),
                ),
            ];
            for (start, end) in spans {
                let (start, end) = ctx.extend_over_off_days(start, end, 2);
                let total = (end - start).num_days() + 1;
                candidates.push(ctx.period(start, end, kind_for_span(total)));
            }
        }
    }

    // Cluster adjacent holidays into one wider candidate.
    for pair in anchor_dates.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        if gap <= CLUSTER_GAP_DAYS {
            let start = pair[0] - Duration::days(2);
            let end = pair[1] + Duration::days(2);
            let (start, end) = ctx.extend_over_off_days(start, end, 2);
            candidates.push(ctx.period(start, end, PeriodKind::Extended));
        }
    }

    candidates
}
