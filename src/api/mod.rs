//! HTTP API module for the Workforce Cost Optimization Engine.
//!
//! This module provides the REST API endpoints for generating workforce
//! cost scenarios and cost breakdowns.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CostRequest, OptimizeRequest};
pub use response::ApiError;
pub use state::AppState;
