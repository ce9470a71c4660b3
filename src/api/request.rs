//! Request types for the PTO Optimization Engine API.
//!
//! This module defines the JSON request structures for the `/optimize`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{EmployerDayOff, Holiday};
use crate::optimizer::{OptimizeParams, Strategy};

/// Request body for the `/optimize` endpoint.
///
/// Contains the planning year, the PTO budget to spend, the strategy, and
/// the calendar inputs the optimizer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    /// The calendar year to plan.
    pub year: i32,
    /// The number of PTO days to spend, exactly.
    pub pto_budget: u32,
    /// The optimization strategy.
    pub strategy: Strategy,
    /// Public holidays for the year.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// Employer-designated days off for the year.
    #[serde(default)]
    pub employer_days_off: Vec<EmployerDayOffRequest>,
}

/// Public holiday information in an optimization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
}

/// Employer day off information in an optimization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerDayOffRequest {
    /// The date of the employer day off.
    pub date: NaiveDate,
    /// The name of the employer day off.
    pub name: String,
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
        }
    }
}

impl From<EmployerDayOffRequest> for EmployerDayOff {
    fn from(req: EmployerDayOffRequest) -> Self {
        EmployerDayOff {
            date: req.date,
            name: req.name,
        }
    }
}

impl From<OptimizationRequest> for OptimizeParams {
    fn from(req: OptimizationRequest) -> Self {
        OptimizeParams {
            year: req.year,
            pto_budget: req.pto_budget,
            strategy: req.strategy,
            holidays: req.holidays.into_iter().map(Into::into).collect(),
            employer_days_off: req.employer_days_off.into_iter().map(Into::into).collect(),
        }
    }
}
