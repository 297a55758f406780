//! Contractor cost calculation.
//!
//! This module computes the annual cost of contractor engagements: the
//! location-adjusted base salary at the contractor premium, with minimal
//! statutory social charges and no benefits.

use rust_decimal::Decimal;

use crate::config::CostCatalog;
use crate::error::EngineResult;
use crate::models::{CostBreakdown, EmploymentType};

use super::{quote_salary, validate_headcount};

/// Statutory social charge rate applied to contractor engagements.
///
/// Contractors carry a flat 5% employer-side charge regardless of
/// location, in place of the location's full social charge rate.
pub const CONTRACTOR_SOCIAL_CHARGE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Calculates the total annual cost of engaging contractors.
///
/// Per head: `contractor_base = base_salary * contractor_premium`,
/// `social_charges = contractor_base * 0.05`, `benefits = 0`. The
/// breakdown's `base_salary` field carries the premium-adjusted rate and
/// `total_cost` is the per-head sum multiplied by the headcount.
///
/// # Arguments
///
/// * `catalog` - The cost catalog
/// * `role_id` - The job role id
/// * `location_id` - The location id
/// * `headcount` - Number of contractors (must be positive)
///
/// # Returns
///
/// Returns a [`CostBreakdown`], or an error if either id is unknown
/// (`RoleNotFound`/`LocationNotFound`) or the headcount is not positive
/// (`InvalidHeadcount`).
///
/// # Examples
///
/// ```no_run
/// use workforce_engine::calculation::contractor_cost;
/// use workforce_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/catalog").unwrap();
/// let breakdown = contractor_cost(loader.catalog(), "software-engineer", "india", 7).unwrap();
/// // 95000 * 0.25 * 1.2 * 1.05 * 7
/// assert_eq!(breakdown.total_cost, Decimal::from(209_475));
/// ```
pub fn contractor_cost(
    catalog: &CostCatalog,
    role_id: &str,
    location_id: &str,
    headcount: i64,
) -> EngineResult<CostBreakdown> {
    let headcount = validate_headcount(headcount)?;
    let quote = quote_salary(catalog, role_id, location_id)?;

    let contractor_base = quote.base_salary * quote.contractor_premium;
    let social_charges = contractor_base * CONTRACTOR_SOCIAL_CHARGE_RATE;
    let total_cost = (contractor_base + social_charges) * Decimal::from(headcount);

    Ok(CostBreakdown {
        base_salary: contractor_base,
        social_charges,
        benefits: Decimal::ZERO,
        total_cost,
        employment_type: EmploymentType::Contractor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogMetadata, JobRole, Location};
    use crate::error::EngineError;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_catalog() -> CostCatalog {
        let metadata = CatalogMetadata {
            name: "test".to_string(),
            version: "2026-01-01".to_string(),
            currency: "USD".to_string(),
        };

        let roles = vec![JobRole {
            id: "software-engineer".to_string(),
            name: "Software Engineer".to_string(),
            base_multiplier: dec("1.0"),
        }];

        let locations = vec![
            Location {
                id: "usa".to_string(),
                name: "USA".to_string(),
                cost_index: dec("1.0"),
                social_charges: dec("0.12"),
                benefits: dec("0.25"),
                contractor_premium: dec("2.0"),
            },
            Location {
                id: "india".to_string(),
                name: "India".to_string(),
                cost_index: dec("0.25"),
                social_charges: dec("0.12"),
                benefits: dec("0.08"),
                contractor_premium: dec("1.2"),
            },
        ];

        let mut base_salaries = HashMap::new();
        base_salaries.insert("software-engineer".to_string(), dec("95000"));

        CostCatalog::new(metadata, roles, locations, base_salaries)
    }

    #[test]
    fn test_contractor_cost_applies_premium() {
        let catalog = test_catalog();

        let breakdown = contractor_cost(&catalog, "software-engineer", "india", 1).unwrap();

        // base = 95000 * 0.25 = 23750; premium-adjusted = 23750 * 1.2 = 28500
        assert_eq!(breakdown.base_salary, dec("28500"));
        assert_eq!(breakdown.social_charges, dec("1425"));
        assert_eq!(breakdown.benefits, Decimal::ZERO);
        assert_eq!(breakdown.total_cost, dec("29925"));
        assert_eq!(breakdown.employment_type, EmploymentType::Contractor);
    }

    #[test]
    fn test_contractor_cost_scales_with_headcount() {
        let catalog = test_catalog();

        let breakdown = contractor_cost(&catalog, "software-engineer", "india", 7).unwrap();

        assert_eq!(breakdown.unit_cost(), dec("29925"));
        assert_eq!(breakdown.total_cost, dec("209475"));
    }

    #[test]
    fn test_contractor_benefits_always_zero() {
        let catalog = test_catalog();

        // USA has a 25% benefits rate for FTEs; contractors get none.
        let breakdown = contractor_cost(&catalog, "software-engineer", "usa", 5).unwrap();
        assert_eq!(breakdown.benefits, Decimal::ZERO);
    }

    #[test]
    fn test_contractor_social_charges_ignore_location_rate() {
        let catalog = test_catalog();

        let breakdown = contractor_cost(&catalog, "software-engineer", "usa", 1).unwrap();

        // 95000 * 2.0 = 190000; charges at the flat 5%, not USA's 12%.
        assert_eq!(breakdown.base_salary, dec("190000"));
        assert_eq!(breakdown.social_charges, dec("9500"));
    }

    #[test]
    fn test_zero_headcount_rejected() {
        let catalog = test_catalog();

        match contractor_cost(&catalog, "software-engineer", "india", 0) {
            Err(EngineError::InvalidHeadcount { value }) => assert_eq!(value, 0),
            other => panic!("Expected InvalidHeadcount, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_location_rejected() {
        let catalog = test_catalog();

        match contractor_cost(&catalog, "software-engineer", "atlantis", 1) {
            Err(EngineError::LocationNotFound { id }) => assert_eq!(id, "atlantis"),
            other => panic!("Expected LocationNotFound, got {:?}", other),
        }
    }
}
