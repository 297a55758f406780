//! Headcount validation.

use crate::error::{EngineError, EngineResult};

/// Validates that a requested headcount is a positive integer.
///
/// Every cost and scenario operation validates headcount up front, so no
/// downstream average can ever divide by zero.
///
/// # Examples
///
/// ```
/// use workforce_engine::calculation::validate_headcount;
///
/// assert_eq!(validate_headcount(10).unwrap(), 10);
/// assert!(validate_headcount(0).is_err());
/// assert!(validate_headcount(-5).is_err());
/// ```
pub fn validate_headcount(value: i64) -> EngineResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(EngineError::InvalidHeadcount { value })
}
