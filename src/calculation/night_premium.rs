//! Night-window overlap.
//!
//! Night hours are the parts of normalized intervals that fall inside the
//! configured night windows on the shift timeline. The default windows are
//! `[0,5)`, `[22,29)` and `[46,48)`: early morning of the first day, the
//! first night, and the start of the second night.

use serde::{Deserialize, Serialize};

use crate::config::NightWindow;

use super::normalize::NormalizedInterval;

/// Night minutes accumulated in one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightOverlap {
    /// The window.
    pub window: NightWindow,
    /// Minutes worked inside it, across all intervals.
    pub minutes: u32,
}

/// Minutes of `interval` that fall inside `window`.
///
/// Closed form: the interval is clipped to the window. An interval that
/// starts before the window counts from the window start; one that ends
/// past it counts up to the window end.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::{normalize, window_overlap_minutes};
/// use shift_pay_engine::config::NightWindow;
/// use shift_pay_engine::models::Attendance;
///
/// let interval = normalize(&[Attendance::parse("21:30", "23:00").unwrap()])[0].unwrap();
/// let window = NightWindow::new(22, 29).unwrap();
/// assert_eq!(window_overlap_minutes(&interval, &window), 60);
/// ```
pub fn window_overlap_minutes(interval: &NormalizedInterval, window: &NightWindow) -> u32 {
    let start = interval.start.total_minutes();
    let end = interval.end.total_minutes();
    let lower = window.start_minutes();
    let upper = window.end_minutes();

    if start < lower {
        if end < lower {
            0
        } else if end < upper {
            end - lower
        } else {
            upper - lower
        }
    } else if start < upper {
        if end < upper {
            end - start
        } else {
            upper - start
        }
    } else {
        0
    }
}

/// Night minutes of one interval across all windows.
pub fn interval_night_minutes(interval: &NormalizedInterval, windows: &[NightWindow]) -> u32 {
    windows
        .iter()
        .map(|window| window_overlap_minutes(interval, window))
        .sum()
}

/// Night minutes per window, summed over every interval of a shift.
///
/// Missing intervals (incomplete attendances) contribute nothing.
pub fn night_overlaps(
    intervals: &[Option<NormalizedInterval>],
    windows: &[NightWindow],
) -> Vec<NightOverlap> {
    windows
        .iter()
        .map(|window| NightOverlap {
            window: *window,
            minutes: intervals
                .iter()
                .flatten()
                .map(|interval| window_overlap_minutes(interval, window))
                .sum(),
        })
        .collect()
}
