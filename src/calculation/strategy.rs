//! Allocation strategy tables.
//!
//! The mixed-mode comparison scenarios are driven by fixed policy tables,
//! not an optimization search: each strategy names the locations, the
//! engagement type, and the share of headcount each line receives. New
//! strategies are added by extending the tables, not by branching logic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::EmploymentType;

/// How much of the requested headcount an allocation rule receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Share {
    /// A fixed fraction of the headcount, rounded down.
    Fraction(Decimal),
    /// Whatever headcount the preceding rules left unassigned.
    Remainder,
}

/// One line of an allocation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRule {
    /// The catalog location id this rule allocates to.
    pub location_id: &'static str,
    /// The engagement type for this rule.
    pub employment_type: EmploymentType,
    /// The share of headcount this rule receives.
    pub share: Share,
}

/// A named allocation strategy: an ordered list of rules whose shares
/// always account for the full headcount.
///
/// The final rule must be [`Share::Remainder`] so that floor rounding on
/// the fractional rules never loses a worker.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioStrategy {
    /// The scenario display name.
    pub name: &'static str,
    /// A short description of the strategy.
    pub description: &'static str,
    /// Allocation rules in output order.
    pub rules: &'static [AllocationRule],
}

/// The most cost-effective mix: 70% contractors in India, the rest FTEs
/// in the Philippines.
pub const COST_EFFECTIVE_STRATEGY: ScenarioStrategy = ScenarioStrategy {
    name: "Most Cost-Effective Mix",
    description: "Optimized for maximum cost savings",
    rules: &[
        AllocationRule {
            location_id: "india",
            employment_type: EmploymentType::Contractor,
            share: Share::Fraction(Decimal::from_parts(7, 0, 0, false, 1)),
        },
        AllocationRule {
            location_id: "philippines",
            employment_type: EmploymentType::Fte,
            share: Share::Remainder,
        },
    ],
};

/// The balanced mix: 40% contractors in India, 35% FTEs in Portugal, the
/// rest FTEs in Poland.
pub const BALANCED_STRATEGY: ScenarioStrategy = ScenarioStrategy {
    name: "Balanced Approach",
    description: "Balances cost, risk, and talent quality",
    rules: &[
        AllocationRule {
            location_id: "india",
            employment_type: EmploymentType::Contractor,
            share: Share::Fraction(Decimal::from_parts(4, 0, 0, false, 1)),
        },
        AllocationRule {
            location_id: "portugal",
            employment_type: EmploymentType::Fte,
            share: Share::Fraction(Decimal::from_parts(35, 0, 0, false, 2)),
        },
        AllocationRule {
            location_id: "poland",
            employment_type: EmploymentType::Fte,
            share: Share::Remainder,
        },
    ],
};

/// Splits a headcount across a strategy's rules.
///
/// Fractional shares round down; the remainder rule absorbs what is left,
/// so the returned counts always sum to `headcount` exactly. Counts may
/// be zero for small headcounts (the caller omits zero-count lines).
///
/// # Examples
///
/// ```
/// use workforce_engine::calculation::{split_headcount, COST_EFFECTIVE_STRATEGY};
///
/// assert_eq!(split_headcount(COST_EFFECTIVE_STRATEGY.rules, 10), vec![7, 3]);
/// assert_eq!(split_headcount(COST_EFFECTIVE_STRATEGY.rules, 1), vec![0, 1]);
/// ```
pub fn split_headcount(rules: &[AllocationRule], headcount: u32) -> Vec<u32> {
    let mut counts = Vec::with_capacity(rules.len());
    let mut assigned: u32 = 0;

    for rule in rules {
        let count = match rule.share {
            Share::Fraction(fraction) => (Decimal::from(headcount) * fraction)
                .floor()
                .to_u32()
                .unwrap_or(0),
            Share::Remainder => headcount - assigned,
        };
        assigned += count;
        counts.push(count);
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_effective_split_of_ten() {
        assert_eq!(split_headcount(COST_EFFECTIVE_STRATEGY.rules, 10), vec![7, 3]);
    }

    #[test]
    fn test_cost_effective_split_floors_fraction() {
        // floor(3 * 0.7) = 2, remainder 1
        assert_eq!(split_headcount(COST_EFFECTIVE_STRATEGY.rules, 3), vec![2, 1]);
    }

    #[test]
    fn test_cost_effective_split_of_one_goes_to_remainder() {
        assert_eq!(split_headcount(COST_EFFECTIVE_STRATEGY.rules, 1), vec![0, 1]);
    }

    #[test]
    fn test_balanced_split_of_ten() {
        // floor(4.0), floor(3.5), remainder
        assert_eq!(split_headcount(BALANCED_STRATEGY.rules, 10), vec![4, 3, 3]);
    }

    #[test]
    fn test_balanced_split_of_one() {
        assert_eq!(split_headcount(BALANCED_STRATEGY.rules, 1), vec![0, 0, 1]);
    }

    #[test]
    fn test_balanced_split_of_three() {
        // floor(1.2) = 1, floor(1.05) = 1, remainder 1
        assert_eq!(split_headcount(BALANCED_STRATEGY.rules, 3), vec![1, 1, 1]);
    }

    #[test]
    fn test_splits_always_sum_to_headcount() {
        for headcount in [1u32, 2, 3, 10, 17, 99, 1000] {
            for strategy in [&COST_EFFECTIVE_STRATEGY, &BALANCED_STRATEGY] {
                let counts = split_headcount(strategy.rules, headcount);
                let total: u32 = counts.iter().sum();
                assert_eq!(
                    total, headcount,
                    "{} split of {} lost workers: {:?}",
                    strategy.name, headcount, counts
                );
            }
        }
    }

    #[test]
    fn test_strategies_end_with_remainder_rule() {
        for strategy in [&COST_EFFECTIVE_STRATEGY, &BALANCED_STRATEGY] {
            assert_eq!(strategy.rules.last().unwrap().share, Share::Remainder);
        }
    }
}
