//! PTO Optimization Engine
//!
//! This crate turns a yearly PTO budget into an optimized calendar of breaks,
//! maximizing consecutive days off by combining PTO days with weekends,
//! public holidays, and employer-designated days off.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod optimizer;
