//! Savings summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The savings achieved by the cost-effective scenario over the current one.
///
/// `absolute` may be zero or negative when the current strategy is already
/// the cheapest; consumers must not assume positive savings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsSummary {
    /// Current cost minus optimized cost.
    pub absolute: Decimal,
    /// `absolute` as a percentage of the current cost (0 when the current
    /// cost is zero).
    pub percentage: Decimal,
    /// Total cost of the current scenario.
    pub current_cost: Decimal,
    /// Total cost of the cost-effective scenario.
    pub optimized_cost: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serialization_round_trip() {
        let savings = SavingsSummary {
            absolute: Decimal::from_str("1020775").unwrap(),
            percentage: Decimal::from_str("78.43").unwrap(),
            current_cost: Decimal::from_str("1301500").unwrap(),
            optimized_cost: Decimal::from_str("280725").unwrap(),
        };

        let json = serde_json::to_string(&savings).unwrap();
        let deserialized: SavingsSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(savings, deserialized);
    }
}
