//! Savings summary calculation.
//!
//! Computes the headline comparison between the current and
//! cost-effective scenarios before any narrative is generated.

use rust_decimal::Decimal;

use crate::models::{SavingsSummary, ScenarioSet};

/// One hundred, for percentage conversion.
const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Summarizes the savings of the cost-effective scenario over the
/// current one.
///
/// `absolute` may be zero or negative when the current strategy is
/// already the cheapest. The percentage is zero when the current cost is
/// zero, so the summary never divides by zero.
///
/// # Examples
///
/// ```
/// use workforce_engine::calculation::savings_summary;
/// use workforce_engine::models::{Scenario, ScenarioSet};
/// use rust_decimal::Decimal;
///
/// fn scenario(name: &str, total: i64) -> Scenario {
///     Scenario {
///         name: name.to_string(),
///         allocations: vec![],
///         total_cost: Decimal::from(total),
///         avg_cost_per_employee: Decimal::ZERO,
///         description: String::new(),
///     }
/// }
///
/// let set = ScenarioSet {
///     cost_effective: scenario("Most Cost-Effective Mix", 250),
///     balanced: scenario("Balanced Approach", 500),
///     current: scenario("Current Strategy", 1000),
/// };
///
/// let savings = savings_summary(&set);
/// assert_eq!(savings.absolute, Decimal::from(750));
/// assert_eq!(savings.percentage, Decimal::from(75));
/// ```
pub fn savings_summary(scenarios: &ScenarioSet) -> SavingsSummary {
    let current_cost = scenarios.current.total_cost;
    let optimized_cost = scenarios.cost_effective.total_cost;
    let absolute = current_cost - optimized_cost;

    let percentage = if current_cost.is_zero() {
        Decimal::ZERO
    } else {
        absolute / current_cost * ONE_HUNDRED
    };

    SavingsSummary {
        absolute,
        percentage,
        current_cost,
        optimized_cost,
    }
}
