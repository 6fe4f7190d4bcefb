//! Audit trail records.
//!
//! Every pay calculation records the decisions it made as a sequence of
//! [`AuditStep`]s, so a user can see why a shift paid what it paid.

use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 4,
///     rule_id: "daily_overtime_detection".to_string(),
///     rule_name: "Daily Overtime Detection".to_string(),
///     input: serde_json::json!({"worked_hours": "10", "threshold": "8"}),
///     output: serde_json::json!({"overtime_hours": "2"}),
///     reasoning: "Shift totals 10h over the 8h daily limit".to_string(),
/// };
/// assert_eq!(step.output["overtime_hours"], "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
