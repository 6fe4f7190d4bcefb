//! Midnight-crossing normalization.
//!
//! Attendances are recorded as bare wall-clock pairs with no date. This
//! module places an ordered run of them on one continuous timeline measured
//! from midnight of the shift's first day, so that `23:40 -> 00:15` becomes
//! `23:40 -> 24:15` and an attendance following it at `01:00` lands at `25:00`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Attendance, ClockTime};

/// Minutes in one hour, as a decimal divisor.
pub const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Hours added to an offset to move it onto the following day.
const NEXT_DAY_HOURS: u32 = 24;

/// How an attendance was placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCrossing {
    /// Taken as recorded.
    None,
    /// The attendance itself runs past midnight; its end moved to the next day.
    WithinInterval,
    /// An earlier attendance already crossed midnight; the whole attendance
    /// moved to the next day.
    BeforeStart,
}

/// A point on the shift timeline: hours past the first midnight, which may
/// exceed 23, plus minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimelineOffset {
    /// Whole hours since the first midnight.
    pub hour: u32,
    /// Minutes past the hour (0-59).
    pub minute: u32,
}

impl TimelineOffset {
    fn from_clock(time: ClockTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    fn next_day(self) -> Self {
        Self {
            hour: self.hour + NEXT_DAY_HOURS,
            ..self
        }
    }

    /// Minutes since the first midnight.
    pub fn total_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Fractional hours since the first midnight, e.g. `24:15` is `24.25`.
    pub fn as_hours(&self) -> Decimal {
        Decimal::from(self.total_minutes()) / MINUTES_PER_HOUR
    }
}

/// An attendance placed on the shift timeline.
///
/// Invariant: `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedInterval {
    /// Where the attendance starts.
    pub start: TimelineOffset,
    /// Where the attendance ends.
    pub end: TimelineOffset,
    /// Which placement rule applied.
    pub crossing: DayCrossing,
}

impl NormalizedInterval {
    /// Length of the interval in whole minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end
            .total_minutes()
            .saturating_sub(self.start.total_minutes())
    }

    /// Length of the interval in hours.
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.duration_minutes()) / MINUTES_PER_HOUR
    }
}

/// Places one complete attendance on the timeline.
///
/// `previous_end_hour` is the timeline hour at which the previous complete
/// attendance ended (0 before the first one).
fn place_on_timeline(
    start: ClockTime,
    end: ClockTime,
    previous_end_hour: u32,
) -> NormalizedInterval {
    let start = TimelineOffset::from_clock(start);
    let end = TimelineOffset::from_clock(end);

    // Comparisons are on whole hours, except the same-hour tie-break.
    if start.hour > end.hour || (start.hour == end.hour && start.minute > end.minute) {
        NormalizedInterval {
            start,
            end: end.next_day(),
            crossing: DayCrossing::WithinInterval,
        }
    } else if previous_end_hour > start.hour {
        NormalizedInterval {
            start: start.next_day(),
            end: end.next_day(),
            crossing: DayCrossing::BeforeStart,
        }
    } else {
        NormalizedInterval {
            start,
            end,
            crossing: DayCrossing::None,
        }
    }
}

/// Normalizes an ordered run of attendances onto one timeline.
///
/// The output has one entry per input attendance. Incomplete attendances
/// map to `None` and leave the day-crossing carry untouched. Order matters:
/// the same attendances in a different order can land on different days.
///
/// Every offset produced from valid clock times stays below 48:00, since a
/// placement adds at most one day.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::{normalize, DayCrossing};
/// use shift_pay_engine::models::Attendance;
///
/// let attendances = vec![
///     Attendance::parse("23:00", "23:50").unwrap(),
///     Attendance::parse("00:10", "01:00").unwrap(),
/// ];
/// let intervals = normalize(&attendances);
///
/// let second = intervals[1].unwrap();
/// assert_eq!(second.crossing, DayCrossing::BeforeStart);
/// assert_eq!((second.start.hour, second.start.minute), (24, 10));
/// assert_eq!((second.end.hour, second.end.minute), (25, 0));
/// ```
pub fn normalize(attendances: &[Attendance]) -> Vec<Option<NormalizedInterval>> {
    attendances
        .iter()
        .scan(0u32, |previous_end_hour, attendance| {
            let interval = attendance.clock_pair().map(|(start, end)| {
                let interval = place_on_timeline(start, end, *previous_end_hour);
                *previous_end_hour = interval.end.hour;
                interval
            });
            Some(interval)
        })
        .collect()
}
