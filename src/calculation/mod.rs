//! Calculation logic for the Workforce Cost Optimization Engine.
//!
//! This module contains all the calculation functions: salary quoting
//! with role and location adjustments, FTE and contractor cost
//! breakdowns, headcount validation, the fixed allocation strategy
//! tables, scenario generation, and the savings summary.

mod contractor_cost;
mod fte_cost;
mod headcount;
mod salary_quote;
mod savings;
mod scenarios;
mod strategy;

pub use contractor_cost::{CONTRACTOR_SOCIAL_CHARGE_RATE, contractor_cost};
pub use fte_cost::fte_cost;
pub use headcount::validate_headcount;
pub use salary_quote::{SalaryQuote, quote_salary};
pub use savings::savings_summary;
pub use scenarios::generate_scenarios;
pub use strategy::{
    AllocationRule, BALANCED_STRATEGY, COST_EFFECTIVE_STRATEGY, ScenarioStrategy, Share,
    split_headcount,
};
