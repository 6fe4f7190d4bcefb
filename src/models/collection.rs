//! Shift collection and its editing workflows.
//!
//! [`ShiftCollection`] is the single entry point a UI state layer uses to
//! edit shifts. It owns the pay rules, so every edit recomputes the touched
//! shift's pay under the same rules, and it keeps shift ids equal to their
//! positions.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::calculation::{total_pay, total_work_hours};
use crate::config::PayRules;
use crate::error::{EngineError, EngineResult};

use super::{ClockField, ClockTime, PayReport, Shift, ShiftRecord};

/// An ordered list of shifts sharing one set of pay rules.
///
/// # Example
///
/// ```
/// use shift_pay_engine::config::PayRules;
/// use shift_pay_engine::models::{ClockField, ShiftCollection};
/// use rust_decimal::Decimal;
///
/// let mut shifts = ShiftCollection::new(PayRules::default());
/// let id = shifts.add_shift();
/// shifts.update_hourly_rate(id, "1000").unwrap();
/// shifts.update_attendance(id, 0, ClockField::Start, "09:00").unwrap();
/// shifts.update_attendance(id, 0, ClockField::End, "17:00").unwrap();
///
/// assert_eq!(shifts.total_work_hours(), Decimal::from(8));
/// assert_eq!(shifts.total_pay(), Decimal::from(8000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftCollection {
    #[serde(skip)]
    rules: PayRules,
    shifts: Vec<Shift>,
}

impl ShiftCollection {
    /// Creates an empty collection.
    pub fn new(rules: PayRules) -> Self {
        Self {
            rules,
            shifts: Vec::new(),
        }
    }

    /// Rebuilds a collection from stored records.
    ///
    /// Records are kept in the given order and renumbered by position;
    /// every cached pay is recomputed.
    pub fn from_records(records: Vec<ShiftRecord>, rules: PayRules) -> Self {
        let shifts = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let mut shift = Shift::from_record(record, &rules);
                shift.set_id(position);
                shift
            })
            .collect();
        Self { rules, shifts }
    }

    /// Returns the stored shape of every shift.
    pub fn to_records(&self) -> Vec<ShiftRecord> {
        self.shifts.iter().map(Shift::to_record).collect()
    }

    /// The rules every shift is paid under.
    pub fn rules(&self) -> &PayRules {
        &self.rules
    }

    /// Replaces the rules and recomputes every shift.
    pub fn set_rules(&mut self, rules: PayRules) {
        self.rules = rules;
        for shift in &mut self.shifts {
            shift.recompute(&self.rules);
        }
    }

    /// The shifts, in order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Number of shifts.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether there are no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Looks up a shift by id.
    pub fn get(&self, shift_id: usize) -> EngineResult<&Shift> {
        self.shifts
            .get(shift_id)
            .ok_or(EngineError::ShiftNotFound { shift_id })
    }

    /// Applies an edit to one shift, handing it the collection's rules.
    fn edit<R>(
        &mut self,
        shift_id: usize,
        f: impl FnOnce(&mut Shift, &PayRules) -> R,
    ) -> EngineResult<R> {
        let shift = self
            .shifts
            .get_mut(shift_id)
            .ok_or(EngineError::ShiftNotFound { shift_id })?;
        Ok(f(shift, &self.rules))
    }

    /// Appends a new shift and returns its id.
    ///
    /// The new shift inherits the rate text of the last shift (blank for
    /// the first one) and starts with one blank attendance.
    pub fn add_shift(&mut self) -> usize {
        let id = self.shifts.len();
        let hourly_rate = self
            .shifts
            .last()
            .map(|shift| shift.hourly_rate_text().to_string())
            .unwrap_or_default();

        let mut shift = Shift::new(id, hourly_rate);
        shift.add_blank_attendance(&self.rules);
        self.shifts.push(shift);

        info!(shift_id = id, "Added shift");
        id
    }

    /// Removes a shift and renumbers the ones after it.
    pub fn remove_shift(&mut self, shift_id: usize) -> EngineResult<Shift> {
        if shift_id >= self.shifts.len() {
            return Err(EngineError::ShiftNotFound { shift_id });
        }
        let removed = self.shifts.remove(shift_id);
        for (position, shift) in self.shifts.iter_mut().enumerate().skip(shift_id) {
            shift.set_id(position);
        }

        info!(shift_id, remaining = self.shifts.len(), "Removed shift");
        Ok(removed)
    }

    /// Replaces a shift's rate text.
    pub fn update_hourly_rate(&mut self, shift_id: usize, text: &str) -> EngineResult<()> {
        self.edit(shift_id, |shift, rules| shift.set_hourly_rate(text, rules))
    }

    /// Appends a blank attendance to a shift.
    pub fn add_attendance(&mut self, shift_id: usize) -> EngineResult<()> {
        self.edit(shift_id, |shift, rules| shift.add_blank_attendance(rules))
    }

    /// Sets one side of an attendance from form text. Blank text clears it.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidClockTime`] for malformed text; nothing changes
    /// - [`EngineError::ShiftNotFound`] / [`EngineError::AttendanceNotFound`]
    pub fn update_attendance(
        &mut self,
        shift_id: usize,
        index: usize,
        field: ClockField,
        text: &str,
    ) -> EngineResult<()> {
        let value = ClockTime::parse_optional(text)?;
        self.edit(shift_id, |shift, rules| {
            shift.update_attendance(index, field, value, rules)
        })?
    }

    /// Removes the last attendance of a shift.
    pub fn remove_last_attendance(&mut self, shift_id: usize) -> EngineResult<()> {
        self.edit(shift_id, |shift, rules| {
            shift.remove_last_attendance(rules);
        })
    }

    /// Hours worked across every shift.
    pub fn total_work_hours(&self) -> Decimal {
        total_work_hours(&self.shifts)
    }

    /// Sum of every shift's cached pay.
    pub fn total_pay(&self) -> Decimal {
        total_pay(&self.shifts)
    }

    /// Builds the export report.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyCollection`] when there are no shifts.
    pub fn report(&self) -> EngineResult<PayReport> {
        PayReport::build(&self.shifts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attendance;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn collection_with(count: usize) -> ShiftCollection {
        let mut shifts = ShiftCollection::new(PayRules::default());
        for _ in 0..count {
            shifts.add_shift();
        }
        shifts
    }

    #[test]
    fn test_first_shift_has_blank_rate_and_one_blank_attendance() {
        let shifts = collection_with(1);
        let shift = shifts.get(0).unwrap();
        assert_eq!(shift.hourly_rate_text(), "");
        assert_eq!(shift.attendances(), &[Attendance::blank()]);
        assert_eq!(shift.total_pay(), Decimal::ZERO);
    }

    #[test]
    fn test_new_shift_inherits_last_rate() {
        let mut shifts = collection_with(1);
        shifts.update_hourly_rate(0, "1150").unwrap();
        let id = shifts.add_shift();
        assert_eq!(id, 1);
        assert_eq!(shifts.get(1).unwrap().hourly_rate_text(), "1150");
    }

    #[test]
    fn test_remove_shift_renumbers() {
        let mut shifts = collection_with(3);
        shifts.update_hourly_rate(2, "900").unwrap();

        let removed = shifts.remove_shift(0).unwrap();
        assert_eq!(removed.id(), 0);
        assert_eq!(shifts.len(), 2);

        let ids: Vec<usize> = shifts.shifts().iter().map(Shift::id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(shifts.get(1).unwrap().hourly_rate_text(), "900");
    }

    #[test]
    fn test_remove_missing_shift() {
        let mut shifts = collection_with(1);
        assert!(matches!(
            shifts.remove_shift(5),
            Err(EngineError::ShiftNotFound { shift_id: 5 })
        ));
        assert_eq!(shifts.len(), 1);
    }

    #[test]
    fn test_update_attendance_rejects_malformed_text() {
        let mut shifts = collection_with(1);
        shifts.update_attendance(0, 0, ClockField::Start, "09:00").unwrap();

        let result = shifts.update_attendance(0, 0, ClockField::Start, "nine");
        assert!(matches!(result, Err(EngineError::InvalidClockTime { .. })));
        assert_eq!(
            shifts.get(0).unwrap().attendances()[0].start,
            ClockTime::from_hm(9, 0)
        );
    }

    #[test]
    fn test_blank_text_clears_time() {
        let mut shifts = collection_with(1);
        shifts.update_hourly_rate(0, "1000").unwrap();
        shifts.update_attendance(0, 0, ClockField::Start, "09:00").unwrap();
        shifts.update_attendance(0, 0, ClockField::End, "10:00").unwrap();
        assert_eq!(shifts.total_pay(), dec("1000"));

        shifts.update_attendance(0, 0, ClockField::End, "").unwrap();
        assert_eq!(shifts.total_pay(), Decimal::ZERO);
    }

    #[test]
    fn test_attendance_workflow_keeps_cache_in_sync() {
        let mut shifts = collection_with(1);
        shifts.update_hourly_rate(0, "1000").unwrap();
        shifts.update_attendance(0, 0, ClockField::Start, "23:00").unwrap();
        shifts.update_attendance(0, 0, ClockField::End, "23:50").unwrap();
        shifts.add_attendance(0).unwrap();
        shifts.update_attendance(0, 1, ClockField::Start, "0:10").unwrap();
        shifts.update_attendance(0, 1, ClockField::End, "1:00").unwrap();

        let shift = shifts.get(0).unwrap();
        assert_eq!(
            shift.total_pay(),
            shift.pay_breakdown(shifts.rules()).total_pay
        );

        shifts.remove_last_attendance(0).unwrap();
        let shift = shifts.get(0).unwrap();
        assert_eq!(shift.attendances().len(), 1);
        assert_eq!(
            shift.total_pay(),
            shift.pay_breakdown(shifts.rules()).total_pay
        );
    }

    #[test]
    fn test_operations_on_missing_shift() {
        let mut shifts = collection_with(0);
        assert!(shifts.update_hourly_rate(0, "1000").is_err());
        assert!(shifts.add_attendance(0).is_err());
        assert!(shifts.remove_last_attendance(0).is_err());
        assert!(shifts.get(0).is_err());
    }

    #[test]
    fn test_set_rules_recomputes_all() {
        let mut shifts = collection_with(2);
        for id in 0..2 {
            shifts.update_hourly_rate(id, "1000").unwrap();
            shifts.update_attendance(id, 0, ClockField::Start, "22:00").unwrap();
            shifts.update_attendance(id, 0, ClockField::End, "23:00").unwrap();
        }
        assert_eq!(shifts.total_pay(), dec("2500"));

        shifts.set_rules(PayRules {
            night_windows: vec![],
            ..PayRules::default()
        });
        assert_eq!(shifts.total_pay(), dec("2000"));
    }

    #[test]
    fn test_records_round_trip_renumbers() {
        let records = vec![
            ShiftRecord {
                id: 7,
                hourly_rate: "1000".to_string(),
                total_pay: Decimal::ZERO,
                attendances: vec![Attendance::parse("09:00", "17:00").unwrap()],
            },
            ShiftRecord {
                id: 9,
                hourly_rate: String::new(),
                total_pay: dec("123"),
                attendances: vec![],
            },
        ];
        let shifts = ShiftCollection::from_records(records, PayRules::default());

        let saved = shifts.to_records();
        assert_eq!(saved[0].id, 0);
        assert_eq!(saved[0].total_pay, dec("8000"));
        assert_eq!(saved[1].id, 1);
        assert_eq!(saved[1].total_pay, Decimal::ZERO);
    }
}
