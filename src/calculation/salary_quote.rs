//! Salary quote functionality.
//!
//! This module derives the location-adjusted salary and rate inputs for a
//! (job role, location) pair. Quotes are computed per request from the
//! catalog and never persisted.

use rust_decimal::Decimal;

use crate::config::CostCatalog;
use crate::error::EngineResult;

/// The location-adjusted salary inputs for one (job role, location) pair.
///
/// Carries everything the cost functions need so they perform no further
/// catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryQuote {
    /// Annual base salary adjusted by the role multiplier and the
    /// location's cost index.
    pub base_salary: Decimal,
    /// Employer-side social charge rate at the location.
    pub social_charge_rate: Decimal,
    /// Benefits rate at the location.
    pub benefits_rate: Decimal,
    /// Contractor premium multiplier at the location.
    pub contractor_premium: Decimal,
}

/// Derives the salary quote for a job role at a location.
///
/// The adjusted base salary is
/// `base_salary_table[role] * role.base_multiplier * location.cost_index`.
///
/// # Arguments
///
/// * `catalog` - The cost catalog to look the role and location up in
/// * `role_id` - The job role id (e.g., "software-engineer")
/// * `location_id` - The location id (e.g., "india")
///
/// # Returns
///
/// Returns a [`SalaryQuote`], or a not-found error if either id is
/// unknown to the catalog.
///
/// # Examples
///
/// ```no_run
/// use workforce_engine::calculation::quote_salary;
/// use workforce_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/catalog").unwrap();
/// let quote = quote_salary(loader.catalog(), "software-engineer", "india").unwrap();
/// // 95000 * 1.0 * 0.25
/// assert_eq!(quote.base_salary, rust_decimal::Decimal::from(23750));
/// ```
pub fn quote_salary(
    catalog: &CostCatalog,
    role_id: &str,
    location_id: &str,
) -> EngineResult<SalaryQuote> {
    let role = catalog.job_role(role_id)?;
    let location = catalog.location(location_id)?;
    let base = catalog.base_salary(role_id)?;

    Ok(SalaryQuote {
        base_salary: base * role.base_multiplier * location.cost_index,
        social_charge_rate: location.social_charges,
        benefits_rate: location.benefits,
        contractor_premium: location.contractor_premium,
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

        let roles = vec![
            JobRole {
                id: "software-engineer".to_string(),
                name: "Software Engineer".to_string(),
                base_multiplier: dec("1.0"),
            },
            JobRole {
                id: "data-scientist".to_string(),
                name: "Data Scientist".to_string(),
                base_multiplier: dec("1.2"),
            },
        ];

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
        base_salaries.insert("data-scientist".to_string(), dec("110000"));

        CostCatalog::new(metadata, roles, locations, base_salaries)
    }

    #[test]
    fn test_quote_applies_multiplier_and_cost_index() {
        let catalog = test_catalog();

        // 110000 * 1.2 * 0.25 = 33000
        let quote = quote_salary(&catalog, "data-scientist", "india").unwrap();
        assert_eq!(quote.base_salary, dec("33000"));
        assert_eq!(quote.social_charge_rate, dec("0.12"));
        assert_eq!(quote.benefits_rate, dec("0.08"));
        assert_eq!(quote.contractor_premium, dec("1.2"));
    }

    #[test]
    fn test_quote_at_baseline_location_is_identity() {
        let catalog = test_catalog();

        let quote = quote_salary(&catalog, "software-engineer", "usa").unwrap();
        assert_eq!(quote.base_salary, dec("95000"));
    }

    #[test]
    fn test_unknown_role_returns_error() {
        let catalog = test_catalog();

        let result = quote_salary(&catalog, "astronaut", "usa");
        match result {
            Err(EngineError::RoleNotFound { id }) => assert_eq!(id, "astronaut"),
            other => panic!("Expected RoleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_location_returns_error() {
        let catalog = test_catalog();

        let result = quote_salary(&catalog, "software-engineer", "atlantis");
        match result {
            Err(EngineError::LocationNotFound { id }) => assert_eq!(id, "atlantis"),
            other => panic!("Expected LocationNotFound, got {:?}", other),
        }
    }
}
