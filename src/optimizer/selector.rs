//! Exact-budget period selection.
//!
//! Chooses a non-overlapping subset of scored candidates whose summed PTO
//! cost equals the requested budget exactly, approximately maximizing
//! total score. This is a subset-sum variant with overlap constraints,
//! solved with a deterministic multi-pass greedy heuristic rather than
//! exhaustive search.
//!
//! The passes form an explicit phase machine
//! (`Fitting → ExactFill → OvershootCorrection → SingleDayFallback →
//! Done | Failed`) so each pass's entry and exit conditions are testable
//! in isolation.

use std::cmp::Ordering;

use tracing::debug;

use crate::config::SelectorLimits;
use crate::error::{EngineError, EngineResult};
use crate::models::{Period, PeriodKind};

use super::generators::GeneratorContext;
use super::scorer::{LENGTH_BANDS, LengthBand, Strategy};

/// The selector's pass, driven top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fitting,
    ExactFill,
    OvershootCorrection,
    SingleDayFallback,
    Done,
    Failed,
}

/// Accumulated selection across passes.
struct SelectionState {
    selected: Vec<Period>,
    used: u32,
}

impl SelectionState {
    fn new() -> Self {
        Self {
            selected: Vec::new(),
            used: 0,
        }
    }

    fn overlaps(&self, candidate: &Period) -> bool {
        self.selected.iter().any(|s| s.overlaps(candidate))
    }

    fn accept(&mut self, candidate: Period) {
        self.used += candidate.pto_days_needed;
        self.selected.push(candidate);
    }
}

/// Deterministic score-descending order: ties broken chronologically so
/// identical inputs always produce identical selections.
fn by_score_desc(a: &Period, b: &Period) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.end.cmp(&b.end))
}

/// Selects a non-overlapping subset of candidates whose PTO cost sums to
/// `pto_target` exactly.
///
/// Returns the selected periods sorted chronologically, or
/// [`EngineError::ExactBudgetUnreachable`] if every pass (including one
/// retry against a synthesized single-day pool) ends short of the target.
pub fn select(
    candidates: &[Period],
    pto_target: u32,
    strategy: Strategy,
    ctx: &GeneratorContext,
    limits: &SelectorLimits,
) -> EngineResult<Vec<Period>> {
    let mut state = SelectionState::new();
    let mut pool: Vec<Period> = candidates.to_vec();
    let mut phase = Phase::Fitting;
    let mut overshoot_rounds = 0u32;
    let mut fallback_added = false;

    loop {
        debug!(?phase, used = state.used, target = pto_target, "selector pass");
        match phase {
            Phase::Fitting => {
                fitting(&mut state, &pool, pto_target, strategy, limits);
                phase = Phase::ExactFill;
            }
            Phase::ExactFill => {
                if exact_fill(&mut state, &pool, pto_target) {
                    phase = Phase::Done;
                } else if overshoot_rounds < 2 && admit_overshoot(&mut state, &pool, pto_target) {
                    phase = Phase::OvershootCorrection;
                } else if !fallback_added {
                    phase = Phase::SingleDayFallback;
                } else {
                    phase = Phase::Failed;
                }
            }
            Phase::OvershootCorrection => {
                overshoot_rounds += 1;
                correct_overshoot(&mut state, pto_target);
                phase = Phase::ExactFill;
            }
            Phase::SingleDayFallback => {
                pool.extend(synthesize_single_days(ctx, &state));
                fallback_added = true;
                phase = Phase::ExactFill;
            }
            Phase::Done => {
                if state.used != pto_target {
                    // Exact-sum is the contract; never return a plan that
                    // quietly used the wrong number of PTO days.
                    return Err(EngineError::ExactBudgetUnreachable {
                        target: pto_target,
                        allocated: state.used,
                    });
                }
                let mut selected = state.selected;
                selected.sort_by(|a, b| a.start.cmp(&b.start));
                return Ok(selected);
            }
            Phase::Failed => {
                return Err(EngineError::ExactBudgetUnreachable {
                    target: pto_target,
                    allocated: state.used,
                });
            }
        }
    }
}

/// Pass 1: greedy fill by score within per-band budget caps.
///
/// Balanced mode walks all four length bands with their configured budget
/// shares; other strategies walk the target band (capped), then the
/// adjacent bands, then everything else.
fn fitting(
    state: &mut SelectionState,
    pool: &[Period],
    target: u32,
    strategy: Strategy,
    limits: &SelectorLimits,
) {
    match strategy.target_band() {
        None => {
            for (index, band) in LENGTH_BANDS.iter().enumerate() {
                let cap = share_of(limits.balanced_band_shares[index], target);
                fill_band(state, pool, target, |c| {
                    LengthBand::of_days(c.total_days) == *band
                }, Some(cap), false);
            }
        }
        Some(primary) => {
            let cap = share_of(limits.primary_band_cap, target);
            fill_band(state, pool, target, |c| {
                LengthBand::of_days(c.total_days) == primary
            }, Some(cap), false);
            fill_band(state, pool, target, |c| {
                let band = LengthBand::of_days(c.total_days);
                band.index().abs_diff(primary.index()) == 1
            }, None, false);
            // Everything else only on positive score, so heavily
            // penalized off-strategy candidates stay out of the plan.
            fill_band(state, pool, target, |c| {
                LengthBand::of_days(c.total_days)
                    .index()
                    .abs_diff(primary.index())
                    > 1
            }, None, true);
        }
    }
}

fn share_of(share: f64, target: u32) -> u32 {
    (share * f64::from(target)).floor() as u32
}

/// Walks one partition of the pool in score order, accepting candidates
/// that fit the remaining budget, the partition cap, and the non-overlap
/// constraint.
fn fill_band<F: Fn(&Period) -> bool>(
    state: &mut SelectionState,
    pool: &[Period],
    target: u32,
    filter: F,
    cap: Option<u32>,
    positive_score_only: bool,
) {
    let mut partition: Vec<&Period> = pool.iter().filter(|c| filter(c)).collect();
    partition.sort_by(|a, b| by_score_desc(a, b));

    let mut partition_used = 0u32;
    for candidate in partition {
        if state.used == target {
            return;
        }
        if positive_score_only && candidate.score <= 0.0 {
            continue;
        }
        let remaining = target - state.used;
        if candidate.pto_days_needed == 0 || candidate.pto_days_needed > remaining {
            continue;
        }
        if let Some(cap) = cap {
            if partition_used + candidate.pto_days_needed > cap {
                continue;
            }
        }
        if state.overlaps(candidate) {
            continue;
        }
        partition_used += candidate.pto_days_needed;
        state.accept(candidate.clone());
    }
}

/// Pass 2: close the remaining gap exactly.
///
/// Prefers a single candidate whose cost equals the remainder; otherwise
/// repeatedly adds the smallest-cost candidate that still fits. Returns
/// true when the budget is hit exactly.
fn exact_fill(state: &mut SelectionState, pool: &[Period], target: u32) -> bool {
    loop {
        let remaining = target - state.used;
        if remaining == 0 {
            return true;
        }

        let exact = pool
            .iter()
            .filter(|c| c.pto_days_needed == remaining && !state.overlaps(c))
            .min_by(|a, b| by_score_desc(a, b));
        if let Some(candidate) = exact {
            state.accept(candidate.clone());
            return true;
        }

        let smallest = pool
            .iter()
            .filter(|c| {
                c.pto_days_needed > 0
                    && c.pto_days_needed < remaining
                    && !state.overlaps(c)
            })
            .min_by(|a, b| {
                a.pto_days_needed
                    .cmp(&b.pto_days_needed)
                    .then_with(|| by_score_desc(a, b))
            });
        match smallest {
            Some(candidate) => state.accept(candidate.clone()),
            None => return false,
        }
    }
}

/// Last resort for pass 2: admit the smallest candidate larger than the
/// remainder, deliberately overshooting so the correction pass can trade
/// an inefficient earlier pick away.
fn admit_overshoot(state: &mut SelectionState, pool: &[Period], target: u32) -> bool {
    let remaining = target - state.used;
    let candidate = pool
        .iter()
        .filter(|c| c.pto_days_needed > remaining && !state.overlaps(c))
        .min_by(|a, b| {
            a.pto_days_needed
                .cmp(&b.pto_days_needed)
                .then_with(|| by_score_desc(a, b))
        });
    match candidate {
        Some(candidate) => {
            state.accept(candidate.clone());
            true
        }
        None => false,
    }
}

/// Pass 3: drop the least-efficient selections until the total is back at
/// or under budget.
fn correct_overshoot(state: &mut SelectionState, target: u32) {
    while state.used > target && !state.selected.is_empty() {
        let worst = state
            .selected
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.efficiency()
                    .partial_cmp(&b.efficiency())
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.pto_days_needed.cmp(&a.pto_days_needed))
                    .then_with(|| a.start.cmp(&b.start))
            })
            .map(|(index, _)| index);
        match worst {
            Some(index) => {
                let removed = state.selected.remove(index);
                state.used -= removed.pto_days_needed;
            }
            None => return,
        }
    }
}

/// Pass 4: synthesize one-day candidates for every workday not already
/// inside a selection, scored by adjacency to existing off days.
fn synthesize_single_days(ctx: &GeneratorContext, state: &SelectionState) -> Vec<Period> {
    let mut singles = Vec::new();

    let mut current = ctx.window_start();
    let end = ctx.window_end();
    while current <= end {
        let covered = state.selected.iter().any(|s| s.contains(current));
        if !covered && !ctx.is_day_off(current) {
            let mut adjacency = 0.0;
            if current.pred_opt().is_some_and(|d| ctx.is_day_off(d)) {
                adjacency += 10.0;
            }
            if current.succ_opt().is_some_and(|d| ctx.is_day_off(d)) {
                adjacency += 10.0;
            }
            singles.push(Period {
                start: current,
                end: current,
                total_days: 1,
                pto_days_needed: 1,
                kind: PeriodKind::Single,
                score: adjacency,
            });
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    singles
}
