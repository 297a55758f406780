//! Configuration types for the workforce cost catalog.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// Metadata about the cost catalog.
///
/// Contains identifying information about the catalog, including its
/// name, version, and the currency all monetary values are expressed in.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMetadata {
    /// The human-readable name of the catalog.
    pub name: String,
    /// The version or effective date of the catalog.
    pub version: String,
    /// The ISO currency code for all monetary values (e.g., "USD").
    pub currency: String,
}

/// A job role in the catalog.
///
/// Job roles define the positions that can be staffed and their salary
/// multiplier relative to the base salary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRole {
    /// The job role id (e.g., "software-engineer").
    pub id: String,
    /// The human-readable name of the role.
    pub name: String,
    /// Multiplier applied to the role's base salary.
    pub base_multiplier: Decimal,
}

/// A geographic location in the catalog.
///
/// Locations carry the cost index and employment rate tables used to
/// adjust salaries and compute employer-side costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The location id (e.g., "portugal").
    pub id: String,
    /// The human-readable name of the location.
    pub name: String,
    /// Multiplier normalizing the location's labor cost against the baseline.
    pub cost_index: Decimal,
    /// Employer-side social charge rate, as a fraction of base salary.
    pub social_charges: Decimal,
    /// Benefits rate, as a fraction of base salary.
    pub benefits: Decimal,
    /// Premium multiplier applied to contractor engagements.
    pub contractor_premium: Decimal,
}

/// Roles configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RolesConfig {
    /// Ordered list of job roles.
    pub roles: Vec<JobRole>,
}

/// Locations configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsConfig {
    /// Ordered list of locations.
    pub locations: Vec<Location>,
}

/// Salaries configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SalariesConfig {
    /// Map of job role id to annual base salary.
    pub base_salaries: HashMap<String, Decimal>,
}

/// The complete cost catalog loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the catalog
/// directory. It is immutable after construction; the engine never
/// mutates it, so it may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct CostCatalog {
    /// Catalog metadata.
    metadata: CatalogMetadata,
    /// Job roles in file order.
    roles: Vec<JobRole>,
    /// Locations in file order.
    locations: Vec<Location>,
    /// Annual base salary by job role id.
    base_salaries: HashMap<String, Decimal>,
}

impl CostCatalog {
    /// Creates a new CostCatalog from its component parts.
    pub fn new(
        metadata: CatalogMetadata,
        roles: Vec<JobRole>,
        locations: Vec<Location>,
        base_salaries: HashMap<String, Decimal>,
    ) -> Self {
        Self {
            metadata,
            roles,
            locations,
            base_salaries,
        }
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns all job roles in catalog order.
    pub fn roles(&self) -> &[JobRole] {
        &self.roles
    }

    /// Returns all locations in catalog order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Returns the base salary table.
    pub fn base_salaries(&self) -> &HashMap<String, Decimal> {
        &self.base_salaries
    }

    /// Gets a job role by its id, or `RoleNotFound`.
    pub fn job_role(&self, id: &str) -> EngineResult<&JobRole> {
        self.roles
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::RoleNotFound { id: id.to_string() })
    }

    /// Gets a location by its id, or `LocationNotFound`.
    pub fn location(&self, id: &str) -> EngineResult<&Location> {
        self.locations
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| EngineError::LocationNotFound { id: id.to_string() })
    }

    /// Gets the annual base salary for a job role, or `SalaryNotFound`.
    ///
    /// This is the unadjusted salary before the role multiplier and
    /// location cost index are applied.
    pub fn base_salary(&self, role_id: &str) -> EngineResult<Decimal> {
        self.base_salaries
            .get(role_id)
            .copied()
            .ok_or_else(|| EngineError::SalaryNotFound {
                role: role_id.to_string(),
            })
    }
}
