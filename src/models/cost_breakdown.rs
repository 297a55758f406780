//! Cost breakdown model.
//!
//! This module defines the [`CostBreakdown`] struct capturing the
//! components of an annual employment cost for one engagement type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmploymentType;

/// The annual cost of staffing a role at a location with one engagement type.
///
/// The component fields (`base_salary`, `social_charges`, `benefits`) are
/// per-head annual amounts; `total_cost` is the per-head total multiplied by
/// the requested headcount. For contractors, `base_salary` already includes
/// the contractor premium and `benefits` is always zero.
///
/// # Example
///
/// ```
/// use workforce_engine::models::{CostBreakdown, EmploymentType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = CostBreakdown {
///     base_salary: Decimal::from_str("95000").unwrap(),
///     social_charges: Decimal::from_str("11400").unwrap(),
///     benefits: Decimal::from_str("23750").unwrap(),
///     total_cost: Decimal::from_str("130150").unwrap(),
///     employment_type: EmploymentType::Fte,
/// };
/// assert_eq!(breakdown.unit_cost(), Decimal::from_str("130150").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Per-head annual base salary (premium-adjusted for contractors).
    pub base_salary: Decimal,
    /// Per-head annual employer-side social charges.
    pub social_charges: Decimal,
    /// Per-head annual benefits cost (zero for contractors).
    pub benefits: Decimal,
    /// Total annual cost across the full headcount.
    pub total_cost: Decimal,
    /// The engagement type this breakdown applies to.
    pub employment_type: EmploymentType,
}

impl CostBreakdown {
    /// Returns the per-head annual cost (base salary plus social charges
    /// plus benefits).
    ///
    /// Computed from the components rather than dividing `total_cost` by
    /// headcount, so it is exact for any headcount.
    pub fn unit_cost(&self) -> Decimal {
        self.base_salary + self.social_charges + self.benefits
    }
}
