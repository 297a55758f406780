//! Request types for the Workforce Cost Optimization Engine API.
//!
//! This module defines the JSON request structures for the `/optimize`
//! and `/cost-calculator` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{EmploymentMix, EmploymentType};

/// Request body for the `/optimize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// The job role id (e.g., "software-engineer").
    pub job_role: String,
    /// The primary location id the workforce is currently based in.
    pub location: String,
    /// Total workers to allocate. Defaults to 1.
    #[serde(default = "default_headcount")]
    pub headcount: i64,
    /// The employment mix the generator may use. Defaults to `both`.
    #[serde(default = "default_mix")]
    pub employment_type: EmploymentMix,
}

/// Request body for the `/cost-calculator` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRequest {
    /// The job role id.
    pub job_role: String,
    /// The location id.
    pub location: String,
    /// Number of workers to cost. Defaults to 1.
    #[serde(default = "default_headcount")]
    pub headcount: i64,
    /// The engagement type to cost. Defaults to `fte`.
    #[serde(default = "default_employment_type")]
    pub employment_type: EmploymentType,
}

fn default_headcount() -> i64 {
    1
}

fn default_mix() -> EmploymentMix {
    EmploymentMix::Both
}

fn default_employment_type() -> EmploymentType {
    EmploymentType::Fte
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_optimize_request() {
        let json = r#"{
            "job_role": "software-engineer",
            "location": "usa",
            "headcount": 10,
            "employment_type": "both"
        }"#;

        let request: OptimizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.job_role, "software-engineer");
        assert_eq!(request.location, "usa");
        assert_eq!(request.headcount, 10);
        assert_eq!(request.employment_type, EmploymentMix::Both);
    }

    #[test]
    fn test_optimize_request_defaults() {
        let json = r#"{
            "job_role": "data-scientist",
            "location": "germany"
        }"#;

        let request: OptimizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.headcount, 1);
        assert_eq!(request.employment_type, EmploymentMix::Both);
    }

    #[test]
    fn test_deserialize_cost_request() {
        let json = r#"{
            "job_role": "devops-engineer",
            "location": "poland",
            "headcount": 3,
            "employment_type": "contractor"
        }"#;

        let request: CostRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.headcount, 3);
        assert_eq!(request.employment_type, EmploymentType::Contractor);
    }

    #[test]
    fn test_cost_request_defaults_to_single_fte() {
        let json = r#"{
            "job_role": "devops-engineer",
            "location": "poland"
        }"#;

        let request: CostRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.headcount, 1);
        assert_eq!(request.employment_type, EmploymentType::Fte);
    }

    #[test]
    fn test_negative_headcount_deserializes() {
        // Validation happens in the engine, not at the serde layer, so the
        // caller gets the INVALID_HEADCOUNT error code rather than a
        // generic parse failure.
        let json = r#"{
            "job_role": "software-engineer",
            "location": "usa",
            "headcount": -5
        }"#;

        let request: OptimizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.headcount, -5);
    }
}
