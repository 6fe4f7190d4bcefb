//! Worked-duration aggregation.
//!
//! Durations are summed in whole minutes and converted to hours once per
//! aggregate, so no rounding accumulates across attendances.

use rust_decimal::Decimal;

use crate::models::{Attendance, Shift};

use super::normalize::{MINUTES_PER_HOUR, NormalizedInterval, normalize};

/// Sums the durations of already-normalized intervals, in minutes.
///
/// Missing intervals (incomplete attendances) contribute nothing.
pub fn interval_minutes(intervals: &[Option<NormalizedInterval>]) -> u32 {
    intervals
        .iter()
        .flatten()
        .map(NormalizedInterval::duration_minutes)
        .filter(|minutes| *minutes > 0)
        .sum()
}

/// Total minutes worked across one shift's attendances.
pub fn shift_work_minutes(attendances: &[Attendance]) -> u32 {
    interval_minutes(&normalize(attendances))
}

/// Total hours worked across one shift's attendances.
///
/// Attendances are normalized first, so runs that cross midnight are
/// measured correctly. No rounding is applied.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::shift_work_hours;
/// use shift_pay_engine::models::Attendance;
/// use rust_decimal::Decimal;
///
/// let attendances = vec![
///     Attendance::parse("22:00", "06:00").unwrap(),
///     Attendance::parse("", "").unwrap(),
/// ];
/// assert_eq!(shift_work_hours(&attendances), Decimal::from(8));
/// ```
pub fn shift_work_hours(attendances: &[Attendance]) -> Decimal {
    Decimal::from(shift_work_minutes(attendances)) / MINUTES_PER_HOUR
}

/// Total hours worked across every shift.
pub fn total_work_hours(shifts: &[Shift]) -> Decimal {
    let minutes: u64 = shifts
        .iter()
        .map(|shift| u64::from(shift_work_minutes(shift.attendances())))
        .sum();
    Decimal::from(minutes) / MINUTES_PER_HOUR
}
