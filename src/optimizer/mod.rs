//! The optimization pipeline.
//!
//! Five stages run in a fixed order: classify the calendar, generate
//! candidate periods, score them for the requested strategy, select a
//! subset whose PTO cost equals the budget exactly, then aggregate
//! statistics over the final plan. Each stage is a separate module with
//! its own tests; this module wires them together behind [`optimize`].

pub mod classifier;
pub mod generators;
pub mod scorer;
pub mod selector;
pub mod stats;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::config::OptimizerConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Break, Day, EmployerDayOff, Holiday, OptimizationResult, Period};

pub use classifier::{classify, is_day_off, is_weekend};
pub use generators::{GeneratorContext, generate_candidates};
pub use scorer::{LengthBand, Strategy, score_candidates};
pub use selector::select;
pub use stats::aggregate;

/// Earliest year accepted for optimization.
pub const MIN_YEAR: i32 = 2000;
/// Latest year accepted for optimization.
pub const MAX_YEAR: i32 = 2100;
/// Largest PTO budget accepted for optimization.
pub const MAX_PTO_BUDGET: u32 = 365;

/// Input for one optimization run.
#[derive(Debug, Clone)]
pub struct OptimizeParams {
    /// The calendar year to plan.
    pub year: i32,
    /// The number of PTO days to spend, all of them, exactly.
    pub pto_budget: u32,
    /// The strategy that shapes scoring and selection.
    pub strategy: Strategy,
    /// Public holidays for the year.
    pub holidays: Vec<Holiday>,
    /// Employer-designated days off for the year.
    pub employer_days_off: Vec<EmployerDayOff>,
}

/// Runs the full pipeline with the current UTC date as "today".
///
/// See [`optimize_at`] for the date-injected variant used by tests.
pub fn optimize(
    params: &OptimizeParams,
    config: &OptimizerConfig,
) -> EngineResult<OptimizationResult> {
    optimize_at(params, config, Utc::now().date_naive())
}

/// Runs the full pipeline against an explicit "today".
///
/// Everything downstream of this function is deterministic: the same
/// params, config, and date always produce the same plan.
///
/// # Errors
///
/// - [`EngineError::Validation`] for an out-of-range year or budget.
/// - [`EngineError::InfeasibleBudget`] when the budget exceeds the
///   remaining workdays of the year.
/// - [`EngineError::ExactBudgetUnreachable`] when the selector cannot
///   land on the budget exactly.
pub fn optimize_at(
    params: &OptimizeParams,
    config: &OptimizerConfig,
    today: NaiveDate,
) -> EngineResult<OptimizationResult> {
    validate(params)?;

    let mut days = classify(params.year, today, &params.holidays, &params.employer_days_off);

    let available_workdays = days.iter().filter(|d| !d.is_off()).count() as u32;
    if params.pto_budget > available_workdays {
        return Err(EngineError::InfeasibleBudget {
            requested: params.pto_budget,
            available: available_workdays,
        });
    }

    let ctx = GeneratorContext::new(
        params.year,
        today,
        &params.holidays,
        &params.employer_days_off,
    );
    let candidates = generate_candidates(&ctx);
    info!(
        year = params.year,
        strategy = %params.strategy,
        budget = params.pto_budget,
        candidates = candidates.len(),
        "generated candidate periods"
    );

    let scored = score_candidates(&candidates, params.strategy, &params.holidays, &config.scoring);
    let selected = select(
        &scored,
        params.pto_budget,
        params.strategy,
        &ctx,
        &config.selector,
    )?;

    project_plan(&mut days, &selected);
    let breaks = build_breaks(&days, &selected);
    let stats = aggregate(&days, &selected);

    info!(
        breaks = breaks.len(),
        total_days_off = stats.total_days_off,
        "optimization complete"
    );

    Ok(OptimizationResult {
        plan_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year: params.year,
        strategy: params.strategy,
        days,
        breaks,
        stats,
    })
}

fn validate(params: &OptimizeParams) -> EngineResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&params.year) {
        return Err(EngineError::Validation {
            field: "year".to_string(),
            message: format!(
                "year {} is outside the supported range {MIN_YEAR}..={MAX_YEAR}",
                params.year
            ),
        });
    }
    if params.pto_budget == 0 || params.pto_budget > MAX_PTO_BUDGET {
        return Err(EngineError::Validation {
            field: "ptoBudget".to_string(),
            message: format!(
                "ptoBudget {} is outside the supported range 1..={MAX_PTO_BUDGET}",
                params.pto_budget
            ),
        });
    }
    for holiday in &params.holidays {
        if holiday.date.year() != params.year {
            return Err(EngineError::Validation {
                field: "holidays".to_string(),
                message: format!(
                    "holiday '{}' on {} is not in year {}",
                    holiday.name, holiday.date, params.year
                ),
            });
        }
    }
    for day_off in &params.employer_days_off {
        if day_off.date.year() != params.year {
            return Err(EngineError::Validation {
                field: "employerDaysOff".to_string(),
                message: format!(
                    "employer day off '{}' on {} is not in year {}",
                    day_off.name, day_off.date, params.year
                ),
            });
        }
    }
    Ok(())
}

/// Marks the selected periods back onto the day array.
///
/// Workdays inside a selection become PTO days; every day inside a
/// selection is part of a break. Days already off keep their flags.
fn project_plan(days: &mut [Day], selected: &[Period]) {
    for day in days.iter_mut() {
        for period in selected {
            if period.contains(day.date) {
                day.is_part_of_break = true;
                if !day.is_off() {
                    day.is_pto = true;
                }
                break;
            }
        }
    }
}

/// Derives the display-facing break list from the projected day array.
fn build_breaks(days: &[Day], selected: &[Period]) -> Vec<Break> {
    selected
        .iter()
        .map(|period| {
            let mut brk = Break {
                start: period.start,
                end: period.end,
                total_days: period.total_days,
                pto_days: 0,
                public_holidays: 0,
                weekends: 0,
                employer_days_off: 0,
            };
            for day in days.iter().filter(|d| period.contains(d.date)) {
                if day.is_pto {
                    brk.pto_days += 1;
                }
                if day.is_public_holiday {
                    brk.public_holidays += 1;
                }
                if day.is_weekend {
                    brk.weekends += 1;
                }
                if day.is_employer_day_off {
                    brk.employer_days_off += 1;
                }
            }
            brk
        })
        .collect()
}
