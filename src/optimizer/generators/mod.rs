//! Candidate period generation.
//!
//! Each generator family implements the same signature
//! `fn(&GeneratorContext) -> Vec<Period>` and the families are composed by
//! concatenation through a registry, so adding a family is one entry in a
//! table rather than a new copy of the enumeration loop.
//!
//! Candidates are generated without regard to the PTO budget; redundancy
//! and overlap across families are resolved later by the scorer and
//! selector.

mod bridge;
mod extended_weekend;
mod holiday_anchored;
mod mini_break;
mod week_long;

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{EmployerDayOff, Holiday, Period, PeriodKind};

use super::classifier;

/// Shared input for every generator family.
///
/// Carries the planning window plus the holiday and employer lists that
/// back the day-off predicate. Generators never receive the day array
/// itself; they rely on the predicate only.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    /// The target year.
    pub year: i32,
    /// The current date. Candidates fully in the past are discarded.
    pub today: NaiveDate,
    /// Public holidays for the year.
    pub holidays: &'a [Holiday],
    /// Employer-designated days off for the year.
    pub employer_days_off: &'a [EmployerDayOff],
}

impl<'a> GeneratorContext<'a> {
    /// Creates a context for one generation run.
    pub fn new(
        year: i32,
        today: NaiveDate,
        holidays: &'a [Holiday],
        employer_days_off: &'a [EmployerDayOff],
    ) -> Self {
        Self {
            year,
            today,
            holidays,
            employer_days_off,
        }
    }

    /// The shared day-off predicate, bound to this context's lists.
    pub fn is_day_off(&self, date: NaiveDate) -> bool {
        classifier::is_day_off(date, self.holidays, self.employer_days_off)
    }

    /// The first date of the planning window: `max(today, Jan 1)`.
    pub fn window_start(&self) -> NaiveDate {
        let jan_first = NaiveDate::from_ymd_opt(self.year, 1, 1)
            .unwrap_or(NaiveDate::MIN);
        jan_first.max(self.today)
    }

    /// The last date of the planning window: December 31 of the year.
    pub fn window_end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, 12, 31).unwrap_or(NaiveDate::MAX)
    }

    /// Counts the days in `[start, end]` that are not already off.
    ///
    /// This is the quantity the exact-sum constraint is built on, so it is
    /// always computed from the predicate and never estimated.
    pub fn pto_days_needed(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let mut count = 0;
        let mut current = start;
        while current <= end {
            if !self.is_day_off(current) {
                count += 1;
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        count
    }

    /// Builds a period over `[start, end]` with its totals recomputed from
    /// the predicate. Score is zero; scoring is a separate pass.
    pub fn period(&self, start: NaiveDate, end: NaiveDate, kind: PeriodKind) -> Period {
        debug_assert!(start <= end);
        Period {
            start,
            end,
            total_days: (end - start).num_days() as u32 + 1,
            pto_days_needed: self.pto_days_needed(start, end),
            kind,
            score: 0.0,
        }
    }

    /// Widens `[start, end]` over adjacent off days, up to `max_steps` in
    /// each direction.
    ///
    /// Used to snap window boundaries onto weekends and holiday runs: the
    /// extra days cost no PTO, so the span only gets cheaper per day.
    pub fn extend_over_off_days(
        &self,
        mut start: NaiveDate,
        mut end: NaiveDate,
        max_steps: u32,
    ) -> (NaiveDate, NaiveDate) {
        for _ in 0..max_steps {
            match start.pred_opt() {
                Some(prev) if self.is_day_off(prev) => start = prev,
                _ => break,
            }
        }
        for _ in 0..max_steps {
            match end.succ_opt() {
                Some(next) if self.is_day_off(next) => end = next,
                _ => break,
            }
        }
        (start, end)
    }
}

/// One generator family.
pub type Generator = fn(&GeneratorContext) -> Vec<Period>;

/// The registry of generator families, composed by concatenation.
const GENERATORS: &[Generator] = &[
    bridge::generate,
    extended_weekend::generate,
    holiday_anchored::generate,
    week_long::generate,
    mini_break::generate,
];

/// Runs every generator family and normalizes the combined output.
///
/// Normalization applies the window rules that no family should have to
/// repeat:
/// - periods ending before today are discarded;
/// - periods straddling today (or the window edges) are clamped and their
///   totals recomputed, and discarded if fewer than 2 days remain;
/// - periods costing zero PTO are discarded (the range is already off);
/// - exact `(start, end)` duplicates across families are collapsed.
///
/// Returns a possibly empty list; an empty list simply means the year has
/// fully elapsed.
pub fn generate_candidates(ctx: &GeneratorContext) -> Vec<Period> {
    let window_start = ctx.window_start();
    let window_end = ctx.window_end();

    let mut seen: HashSet<(NaiveDate, NaiveDate)> = HashSet::new();
    let mut candidates = Vec::new();

    for generate in GENERATORS {
        for raw in generate(ctx) {
            if raw.end < window_start || raw.start > window_end {
                continue;
            }

            let start = raw.start.max(window_start);
            let end = raw.end.min(window_end);
            let period = if start != raw.start || end != raw.end {
                ctx.period(start, end, raw.kind)
            } else {
                raw
            };

            if period.total_days < 2 || period.pto_days_needed == 0 {
                continue;
            }
            if seen.insert((period.start, period.end)) {
                candidates.push(period);
            }
        }
    }

    candidates
}
