//! Workforce scenario models.
//!
//! This module contains the [`Scenario`] and [`ScenarioSet`] types that
//! describe named workforce allocation strategies and their computed costs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmploymentType;

/// A single line in a workforce allocation: some headcount of one
/// engagement type at one location.
///
/// Invariant: `total_cost = unit_cost * headcount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLine {
    /// Display name of the location (e.g., "India").
    pub location: String,
    /// The engagement type for this line.
    pub employment_type: EmploymentType,
    /// Number of workers allocated to this line.
    pub headcount: u32,
    /// Annual cost per worker on this line.
    pub unit_cost: Decimal,
    /// Total annual cost for this line.
    pub total_cost: Decimal,
}

/// A named workforce allocation strategy with its computed cost.
///
/// Invariants: `total_cost` equals the sum of the allocation line totals,
/// and `avg_cost_per_employee` equals `total_cost` divided by the summed
/// headcount (the generator rejects zero headcount before this division
/// can occur).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// The scenario's display name (e.g., "Most Cost-Effective Mix").
    pub name: String,
    /// Allocation lines in strategy order.
    pub allocations: Vec<AllocationLine>,
    /// Total annual cost across all allocation lines.
    pub total_cost: Decimal,
    /// Average annual cost per allocated worker.
    pub avg_cost_per_employee: Decimal,
    /// A short description of the strategy.
    pub description: String,
}

impl Scenario {
    /// Returns the total headcount across all allocation lines.
    pub fn headcount(&self) -> u32 {
        self.allocations.iter().map(|a| a.headcount).sum()
    }
}

/// The three comparison scenarios produced per optimization request.
///
/// Generated fresh per request; never shared or cached across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSet {
    /// The lowest-cost allocation the fixed policy can produce.
    pub cost_effective: Scenario,
    /// A mix balancing cost against risk and talent quality.
    pub balanced: Scenario,
    /// The baseline: the requested headcount staffed as-is.
    pub current: Scenario,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_line(headcount: u32, unit_cost: &str) -> AllocationLine {
        let unit = dec(unit_cost);
        AllocationLine {
            location: "India".to_string(),
            employment_type: EmploymentType::Contractor,
            headcount,
            unit_cost: unit,
            total_cost: unit * Decimal::from(headcount),
        }
    }

    #[test]
    fn test_scenario_headcount_sums_lines() {
        let scenario = Scenario {
            name: "Balanced Approach".to_string(),
            allocations: vec![sample_line(4, "29925"), sample_line(6, "72105")],
            total_cost: dec("552330"),
            avg_cost_per_employee: dec("55233"),
            description: "Balances cost, risk, and talent quality".to_string(),
        };
        assert_eq!(scenario.headcount(), 10);
    }

    #[test]
    fn test_allocation_line_total_is_unit_times_headcount() {
        let line = sample_line(7, "29925");
        assert_eq!(line.total_cost, line.unit_cost * Decimal::from(line.headcount));
    }

    #[test]
    fn test_scenario_serialization_round_trip() {
        let scenario = Scenario {
            name: "Current Strategy".to_string(),
            allocations: vec![AllocationLine {
                location: "USA".to_string(),
                employment_type: EmploymentType::Fte,
                headcount: 10,
                unit_cost: dec("130150"),
                total_cost: dec("1301500"),
            }],
            total_cost: dec("1301500"),
            avg_cost_per_employee: dec("130150"),
            description: "Current baseline approach".to_string(),
        };

        let json = serde_json::to_string(&scenario).unwrap();
        assert!(json.contains("\"name\":\"Current Strategy\""));
        assert!(json.contains("\"employment_type\":\"fte\""));

        let deserialized: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, deserialized);
    }
}
