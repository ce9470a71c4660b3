//! Core data models for the PTO Optimization Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day;
mod period;
mod plan;

pub use day::{Day, EmployerDayOff, Holiday};
pub use period::{Period, PeriodKind};
pub use plan::{Break, OptimizationResult, Stats};
