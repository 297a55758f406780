//! Employment type models.
//!
//! This module defines the employment arrangements the engine can cost:
//! direct hires (FTE) and contractors, plus the mixed mode used when
//! generating comparison scenarios.

use serde::{Deserialize, Serialize};

/// Represents the type of a single employment engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employee: direct hire with employer-paid social charges
    /// and benefits.
    Fte,
    /// Contractor: no employer-provided benefits, minimal social charges,
    /// engaged at a cost premium.
    Contractor,
}

impl EmploymentType {
    /// Returns the display label used in allocation lines ("FTE" or
    /// "Contractor").
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::Fte => "FTE",
            EmploymentType::Contractor => "Contractor",
        }
    }
}

/// The workforce composition requested for scenario generation.
///
/// `Both` allows the generator to mix FTEs and contractors across
/// locations; the single-type variants pin every scenario to that
/// engagement at the primary location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentMix {
    /// All positions filled by full-time employees.
    Fte,
    /// All positions filled by contractors.
    Contractor,
    /// The generator may mix both engagement types.
    Both,
}

impl EmploymentMix {
    /// Returns the single employment type this mix pins scenarios to,
    /// or `None` for `Both`.
    pub fn single_type(&self) -> Option<EmploymentType> {
        match self {
            EmploymentMix::Fte => Some(EmploymentType::Fte),
            EmploymentMix::Contractor => Some(EmploymentType::Contractor),
            EmploymentMix::Both => None,
        }
    }
}
