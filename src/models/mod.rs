//! Core data models for the Workforce Cost Optimization Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cost_breakdown;
mod employment;
mod optimization_result;
mod savings;
mod scenario;

pub use cost_breakdown::CostBreakdown;
pub use employment::{EmploymentMix, EmploymentType};
pub use optimization_result::{OptimizationResult, RequestSummary};
pub use savings::SavingsSummary;
pub use scenario::{AllocationLine, Scenario, ScenarioSet};
