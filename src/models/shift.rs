//! Shift model.
//!
//! A [`Shift`] is an ordered run of attendances paid at one hourly rate. It
//! caches its total pay; the cache is private and every mutation goes
//! through a method that recomputes it, so it always matches the rate and
//! attendances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{
    ShiftPayResult, calculate_shift_pay, resolve_hourly_rate, shift_work_hours,
};
use crate::config::PayRules;
use crate::error::{EngineError, EngineResult};

use super::{Attendance, ClockField, ClockTime, HourlyRate};

/// The stored shape of a shift, as kept by persistence collaborators.
///
/// `total_pay` is written for consumers that only read it; it is ignored
/// when a record is turned back into a [`Shift`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Position of the shift in its collection.
    pub id: usize,
    /// The rate exactly as typed.
    #[serde(default)]
    pub hourly_rate: String,
    /// The pay cached when the record was written.
    #[serde(default)]
    pub total_pay: Decimal,
    /// The attendances, in order.
    #[serde(default)]
    pub attendances: Vec<Attendance>,
}

/// A shift with its cached total pay.
///
/// # Example
///
/// ```
/// use shift_pay_engine::config::PayRules;
/// use shift_pay_engine::models::{Attendance, Shift};
/// use rust_decimal::Decimal;
///
/// let rules = PayRules::default();
/// let mut shift = Shift::new(0, "1000");
/// shift.push_attendance(Attendance::parse("09:00", "17:00").unwrap(), &rules);
/// assert_eq!(shift.total_pay(), Decimal::from(8000));
///
/// shift.set_hourly_rate("1100", &rules);
/// assert_eq!(shift.total_pay(), Decimal::from(8800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    id: usize,
    hourly_rate: String,
    total_pay: Decimal,
    attendances: Vec<Attendance>,
}

impl Shift {
    /// Creates a shift with no attendances.
    pub fn new(id: usize, hourly_rate: impl Into<String>) -> Self {
        Self {
            id,
            hourly_rate: hourly_rate.into(),
            total_pay: Decimal::ZERO,
            attendances: Vec::new(),
        }
    }

    /// Creates a shift and computes its pay.
    pub fn with_attendances(
        id: usize,
        hourly_rate: impl Into<String>,
        attendances: Vec<Attendance>,
        rules: &PayRules,
    ) -> Self {
        let mut shift = Self {
            id,
            hourly_rate: hourly_rate.into(),
            total_pay: Decimal::ZERO,
            attendances,
        };
        shift.recompute(rules);
        shift
    }

    /// Rebuilds a shift from its stored shape, recomputing the pay.
    pub fn from_record(record: ShiftRecord, rules: &PayRules) -> Self {
        Self::with_attendances(record.id, record.hourly_rate, record.attendances, rules)
    }

    /// Returns the stored shape of this shift.
    pub fn to_record(&self) -> ShiftRecord {
        ShiftRecord {
            id: self.id,
            hourly_rate: self.hourly_rate.clone(),
            total_pay: self.total_pay,
            attendances: self.attendances.clone(),
        }
    }

    /// Position of the shift in its collection.
    pub fn id(&self) -> usize {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    /// The rate exactly as typed.
    pub fn hourly_rate_text(&self) -> &str {
        &self.hourly_rate
    }

    /// The parsed rate, if the text is a valid non-negative number.
    pub fn hourly_rate(&self) -> Option<HourlyRate> {
        HourlyRate::parse(&self.hourly_rate)
    }

    /// The attendances, in order.
    pub fn attendances(&self) -> &[Attendance] {
        &self.attendances
    }

    /// The cached total pay.
    pub fn total_pay(&self) -> Decimal {
        self.total_pay
    }

    /// Hours worked in this shift.
    pub fn work_hours(&self) -> Decimal {
        shift_work_hours(&self.attendances)
    }

    /// Full pay breakdown under `rules`. Does not touch the cache.
    pub fn pay_breakdown(&self, rules: &PayRules) -> ShiftPayResult {
        calculate_shift_pay(self.hourly_rate(), &self.attendances, rules)
    }

    /// Recomputes the cached pay from the current rate and attendances.
    ///
    /// Every mutating method calls this; call it directly only after the
    /// rules themselves change.
    pub fn recompute(&mut self, rules: &PayRules) {
        let rate = resolve_hourly_rate(&self.hourly_rate);
        self.total_pay = calculate_shift_pay(rate, &self.attendances, rules).total_pay;
        debug!(shift_id = self.id, total_pay = %self.total_pay.normalize(), "Recomputed shift pay");
    }

    /// Replaces the rate text.
    pub fn set_hourly_rate(&mut self, text: impl Into<String>, rules: &PayRules) {
        self.hourly_rate = text.into();
        self.recompute(rules);
    }

    /// Appends an attendance.
    pub fn push_attendance(&mut self, attendance: Attendance, rules: &PayRules) {
        self.attendances.push(attendance);
        self.recompute(rules);
    }

    /// Appends an attendance with neither time recorded.
    pub fn add_blank_attendance(&mut self, rules: &PayRules) {
        self.push_attendance(Attendance::blank(), rules);
    }

    /// Sets or clears one side of the attendance at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AttendanceNotFound`] when `index` is out of range.
    pub fn update_attendance(
        &mut self,
        index: usize,
        field: ClockField,
        value: Option<ClockTime>,
        rules: &PayRules,
    ) -> EngineResult<()> {
        let shift_id = self.id;
        let attendance = self
            .attendances
            .get_mut(index)
            .ok_or(EngineError::AttendanceNotFound { shift_id, index })?;
        attendance.set(field, value);
        self.recompute(rules);
        Ok(())
    }

    /// Removes the last attendance, if any.
    pub fn remove_last_attendance(&mut self, rules: &PayRules) -> Option<Attendance> {
        let removed = self.attendances.pop();
        if removed.is_some() {
            self.recompute(rules);
        }
        removed
    }
}
