//! Full-time employee cost calculation.
//!
//! This module computes the fully-loaded annual cost of direct hires:
//! location-adjusted base salary plus employer-side social charges plus
//! benefits.

use rust_decimal::Decimal;

use crate::config::CostCatalog;
use crate::error::EngineResult;
use crate::models::{CostBreakdown, EmploymentType};

use super::{quote_salary, validate_headcount};

/// Calculates the total annual cost of staffing FTEs.
///
/// Per head: `social_charges = base_salary * social_charge_rate`,
/// `benefits = base_salary * benefits_rate`. The breakdown's `total_cost`
/// is the per-head sum multiplied by the headcount.
///
/// # Arguments
///
/// * `catalog` - The cost catalog
/// * `role_id` - The job role id
/// * `location_id` - The location id
/// * `headcount` - Number of employees (must be positive)
///
/// # Returns
///
/// Returns a [`CostBreakdown`] with per-head components, or an error if
/// either id is unknown (`RoleNotFound`/`LocationNotFound`) or the
/// headcount is not positive (`InvalidHeadcount`).
///
/// # Examples
///
/// ```no_run
/// use workforce_engine::calculation::fte_cost;
/// use workforce_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/catalog").unwrap();
/// let breakdown = fte_cost(loader.catalog(), "software-engineer", "usa", 10).unwrap();
/// // (95000 + 95000*0.12 + 95000*0.25) * 10
/// assert_eq!(breakdown.total_cost, Decimal::from(1_301_500));
/// ```
pub fn fte_cost(
    catalog: &CostCatalog,
    role_id: &str,
    location_id: &str,
    headcount: i64,
) -> EngineResult<CostBreakdown> {
    let headcount = validate_headcount(headcount)?;
    let quote = quote_salary(catalog, role_id, location_id)?;

    let base_salary = quote.base_salary;
    let social_charges = base_salary * quote.social_charge_rate;
    let benefits = base_salary * quote.benefits_rate;
    let total_cost = (base_salary + social_charges + benefits) * Decimal::from(headcount);

    Ok(CostBreakdown {
        base_salary,
        social_charges,
        benefits,
        total_cost,
        employment_type: EmploymentType::Fte,
    })
}
