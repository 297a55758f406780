//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the workforce
//! cost catalog from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    CatalogMetadata, CostCatalog, JobRole, Location, LocationsConfig, RolesConfig, SalariesConfig,
};

/// Loads and provides access to the workforce cost catalog.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query job roles, locations, and base salaries.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/catalog/
/// ├── catalog.yaml    # Catalog metadata
/// ├── roles.yaml      # Job roles
/// ├── locations.yaml  # Locations and their rate tables
/// └── salaries.yaml   # Annual base salary by role id
/// ```
///
/// # Example
///
/// ```no_run
/// use workforce_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/catalog").unwrap();
///
/// let role = loader.job_role("software-engineer").unwrap();
/// println!("Role: {}", role.name);
///
/// let salary = loader.base_salary("software-engineer").unwrap();
/// println!("Base salary: ${}", salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: CostCatalog,
}

impl ConfigLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog directory (e.g., "./config/catalog")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A role in `roles.yaml` has no entry in `salaries.yaml`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use workforce_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/catalog")?;
    /// # Ok::<(), workforce_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CatalogMetadata>(&path.join("catalog.yaml"))?;
        let roles_config = Self::load_yaml::<RolesConfig>(&path.join("roles.yaml"))?;
        let locations_config = Self::load_yaml::<LocationsConfig>(&path.join("locations.yaml"))?;
        let salaries_config = Self::load_yaml::<SalariesConfig>(&path.join("salaries.yaml"))?;

        // Every role must have a salary entry; fail at load rather than
        // surfacing a missing entry on the first request that hits it.
        for role in &roles_config.roles {
            if !salaries_config.base_salaries.contains_key(&role.id) {
                return Err(EngineError::SalaryNotFound {
                    role: role.id.clone(),
                });
            }
        }

        let catalog = CostCatalog::new(
            metadata,
            roles_config.roles,
            locations_config.locations,
            salaries_config.base_salaries,
        );

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying cost catalog.
    pub fn catalog(&self) -> &CostCatalog {
        &self.catalog
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        self.catalog.metadata()
    }

    /// Gets a job role by its id.
    ///
    /// # Arguments
    ///
    /// * `id` - The job role id (e.g., "software-engineer")
    ///
    /// # Returns
    ///
    /// Returns the job role if found, or `RoleNotFound` error.
    pub fn job_role(&self, id: &str) -> EngineResult<&JobRole> {
        self.catalog.job_role(id)
    }

    /// Gets a location by its id.
    ///
    /// # Arguments
    ///
    /// * `id` - The location id (e.g., "portugal")
    ///
    /// # Returns
    ///
    /// Returns the location if found, or `LocationNotFound` error.
    pub fn location(&self, id: &str) -> EngineResult<&Location> {
        self.catalog.location(id)
    }

    /// Gets the annual base salary for a job role.
    ///
    /// This is the unadjusted salary before the role multiplier and
    /// location cost index are applied.
    pub fn base_salary(&self, role_id: &str) -> EngineResult<Decimal> {
        self.catalog.base_salary(role_id)
    }

    /// Returns all job roles in catalog order.
    pub fn job_roles(&self) -> &[JobRole] {
        self.catalog.roles()
    }

    /// Returns all locations in catalog order.
    pub fn locations(&self) -> &[Location] {
        self.catalog.locations()
    }
}
