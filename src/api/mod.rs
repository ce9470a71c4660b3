//! HTTP API module for the PTO Optimization Engine.
//!
//! This module provides the REST API endpoint for turning a PTO budget
//! into an optimized calendar of breaks.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::OptimizationRequest;
pub use response::ApiError;
pub use state::AppState;
