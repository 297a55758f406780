//! Configuration module for the Workforce Cost Optimization Engine.
//!
//! This module provides loading and typed access to the workforce cost
//! catalog: job roles, locations, and the base salary table.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CatalogMetadata, CostCatalog, JobRole, Location, LocationsConfig, RolesConfig, SalariesConfig,
};
