//! Optimization result model.
//!
//! This module contains the [`OptimizationResult`] type returned by the
//! `/optimize` endpoint, bundling the generated scenarios with the savings
//! summary and the narrative explanation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmploymentMix, SavingsSummary, ScenarioSet};

/// Echo of the request parameters an optimization was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    /// The requested job role id.
    pub job_role: String,
    /// The requested primary location id.
    pub location: String,
    /// The requested headcount.
    pub headcount: u32,
    /// The requested employment mix.
    pub employment_type: EmploymentMix,
}

/// The complete result of a workforce optimization.
///
/// # Example
///
/// ```
/// use workforce_engine::models::{
///     OptimizationResult, RequestSummary, EmploymentMix, SavingsSummary, Scenario, ScenarioSet,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let scenario = Scenario {
///     name: "Current Strategy".to_string(),
///     allocations: vec![],
///     total_cost: Decimal::ZERO,
///     avg_cost_per_employee: Decimal::ZERO,
///     description: "Current baseline approach".to_string(),
/// };
/// let result = OptimizationResult {
///     analysis_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     scenarios: ScenarioSet {
///         cost_effective: scenario.clone(),
///         balanced: scenario.clone(),
///         current: scenario,
///     },
///     savings: SavingsSummary {
///         absolute: Decimal::ZERO,
///         percentage: Decimal::ZERO,
///         current_cost: Decimal::ZERO,
///         optimized_cost: Decimal::ZERO,
///     },
///     explanation: String::new(),
///     metadata: RequestSummary {
///         job_role: "software-engineer".to_string(),
///         location: "usa".to_string(),
///         headcount: 1,
///         employment_type: EmploymentMix::Both,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Unique identifier for this analysis.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the analysis.
    pub engine_version: String,
    /// The three generated comparison scenarios.
    pub scenarios: ScenarioSet,
    /// Savings of the cost-effective scenario over the current one.
    pub savings: SavingsSummary,
    /// Plain-language narrative of the savings.
    pub explanation: String,
    /// Echo of the request parameters.
    pub metadata: RequestSummary,
}
