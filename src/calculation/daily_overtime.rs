//! Daily overtime split.
//!
//! A shift's worked hours are measured once, as a total across all of its
//! attendances, against the daily limit from [`PayRules`]. Hours up to the
//! limit are ordinary; the rest carry the overtime surcharge.
//!
//! [`PayRules`]: crate::config::PayRules

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Ordinary and overtime hours for one shift, with the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeDetection {
    /// The number of ordinary hours (up to the threshold).
    pub ordinary_hours: Decimal,
    /// The number of overtime hours (hours exceeding the threshold).
    pub overtime_hours: Decimal,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Splits a shift total at the daily overtime limit.
///
/// # Arguments
///
/// * `worked_hours` - The total hours worked in the shift
/// * `threshold` - The overtime threshold (8 hours by default)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::detect_daily_overtime;
/// use shift_pay_engine::config::DEFAULT_DAILY_OVERTIME_THRESHOLD;
/// use rust_decimal::Decimal;
///
/// let at_threshold = detect_daily_overtime(Decimal::from(8), DEFAULT_DAILY_OVERTIME_THRESHOLD, 1);
/// assert_eq!(at_threshold.overtime_hours, Decimal::ZERO);
///
/// let long_shift = detect_daily_overtime(Decimal::from(10), DEFAULT_DAILY_OVERTIME_THRESHOLD, 1);
/// assert_eq!(long_shift.ordinary_hours, Decimal::from(8));
/// assert_eq!(long_shift.overtime_hours, Decimal::from(2));
/// ```
pub fn detect_daily_overtime(
    worked_hours: Decimal,
    threshold: Decimal,
    step_number: u32,
) -> DailyOvertimeDetection {
    let ordinary_hours = worked_hours.min(threshold);
    let overtime_hours = (worked_hours - threshold).max(Decimal::ZERO);

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "Shift totals {}h over the {}h daily limit; {}h take the overtime surcharge",
            worked_hours.normalize(),
            threshold.normalize(),
            overtime_hours.normalize()
        )
    } else if worked_hours == threshold {
        format!(
            "Shift totals exactly the daily limit of {}h; every hour is ordinary",
            threshold.normalize()
        )
    } else {
        format!(
            "Shift totals {}h, {}h short of the daily limit; every hour is ordinary",
            worked_hours.normalize(),
            (threshold - worked_hours).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_overtime_detection".to_string(),
        rule_name: "Daily Overtime Detection".to_string(),
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "ordinary_hours": ordinary_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    DailyOvertimeDetection {
        ordinary_hours,
        overtime_hours,
        audit_step,
    }
}
