//! Export report models.
//!
//! A [`PayReport`] is the plain data handed to the spreadsheet collaborator:
//! one row per shift followed by rounded totals.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{total_pay, total_work_hours};
use crate::error::{EngineError, EngineResult};

use super::{Attendance, Shift};

/// One row of the export: a shift and its figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// One-based shift number as shown to the user.
    pub shift_number: usize,
    /// The rate exactly as typed.
    pub hourly_rate: String,
    /// Hours worked, unrounded.
    pub work_hours: Decimal,
    /// The shift's cached pay, unrounded.
    pub total_pay: Decimal,
    /// The attendances, in order.
    pub attendances: Vec<Attendance>,
}

/// The export of a whole shift collection.
///
/// # Example
///
/// ```
/// use shift_pay_engine::config::PayRules;
/// use shift_pay_engine::models::{Attendance, PayReport, Shift};
/// use rust_decimal::Decimal;
///
/// let rules = PayRules::default();
/// let shifts = vec![Shift::with_attendances(
///     0,
///     "1000",
///     vec![Attendance::parse("09:00", "09:50").unwrap()],
///     &rules,
/// )];
///
/// let report = PayReport::build(&shifts).unwrap();
/// assert_eq!(report.rows[0].shift_number, 1);
/// assert_eq!(report.total_work_hours, Decimal::from(1));
/// assert_eq!(report.total_pay, Decimal::from(833));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One row per shift, in order.
    pub rows: Vec<ShiftSummary>,
    /// Total hours across all shifts, rounded to whole hours.
    pub total_work_hours: Decimal,
    /// Total pay across all shifts, rounded to a whole amount.
    pub total_pay: Decimal,
}

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

impl PayReport {
    /// Builds a report from shifts with current cached pay.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyCollection`] when `shifts` is empty.
    pub fn build(shifts: &[Shift]) -> EngineResult<Self> {
        if shifts.is_empty() {
            return Err(EngineError::EmptyCollection);
        }

        let rows = shifts
            .iter()
            .map(|shift| ShiftSummary {
                shift_number: shift.id() + 1,
                hourly_rate: shift.hourly_rate_text().to_string(),
                work_hours: shift.work_hours(),
                total_pay: shift.total_pay(),
                attendances: shift.attendances().to_vec(),
            })
            .collect();

        Ok(Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            rows,
            total_work_hours: round_whole(total_work_hours(shifts)),
            total_pay: round_whole(total_pay(shifts)),
        })
    }
}
