//! Optimization result models.
//!
//! This module contains the [`Break`], [`Stats`], and
//! [`OptimizationResult`] types that make up the engine's output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Day;
use crate::optimizer::Strategy;

/// A selected period enriched with its day-off composition for display.
///
/// Every day in the range is accounted for by the composition counters:
/// a PTO day, a weekend day, a holiday, or an employer day off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Break {
    /// The first date of the break (inclusive).
    pub start: NaiveDate,
    /// The last date of the break (inclusive).
    pub end: NaiveDate,
    /// The length of the break in calendar days.
    pub total_days: u32,
    /// PTO days spent within this break.
    pub pto_days: u32,
    /// Public holidays falling within this break.
    pub public_holidays: u32,
    /// Weekend days falling within this break.
    pub weekends: u32,
    /// Employer days off falling within this break.
    pub employer_days_off: u32,
}

/// Aggregate counters computed from the selected plan.
///
/// Wholly derived from the classified day array and the selected periods;
/// never independently mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Count of days in the planning window with any off flag set.
    pub total_days_off: u32,
    /// Count of PTO days spent.
    #[serde(rename = "totalPTODays")]
    pub total_pto_days: u32,
    /// Count of public holidays in the planning window.
    pub total_public_holidays: u32,
    /// Count of employer days off in the planning window.
    pub total_employer_days_off: u32,
    /// Count of selected breaks 3 or 4 days long.
    pub total_extended_weekends: u32,
}

/// The engine's complete output for one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Unique identifier for this plan.
    pub plan_id: Uuid,
    /// When the plan was produced (UTC).
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the plan.
    pub engine_version: String,
    /// The target year.
    pub year: i32,
    /// The strategy the plan was optimized for.
    pub strategy: Strategy,
    /// Every classified day in the planning window, chronological.
    pub days: Vec<Day>,
    /// The selected breaks, chronological.
    pub breaks: Vec<Break>,
    /// Aggregate counters for the plan.
    pub stats: Stats,
}
