//! Calculation logic for the Shift Pay Engine.
//!
//! The stages run one way: attendances are normalized onto a continuous
//! timeline, worked durations are summed, and pay is computed from base
//! rate, daily overtime and night-window overlap. Every function here is
//! pure.

mod daily_overtime;
mod night_premium;
mod normalize;
mod shift_pay;
mod work_hours;

pub use daily_overtime::{DailyOvertimeDetection, detect_daily_overtime};
pub use night_premium::{
    NightOverlap, interval_night_minutes, night_overlaps, window_overlap_minutes,
};
pub use normalize::{
    DayCrossing, MINUTES_PER_HOUR, NormalizedInterval, TimelineOffset, normalize,
};
pub use shift_pay::{
    ShiftPayResult, calculate_shift_pay, resolve_hourly_rate, shift_pay, total_pay,
};
pub use work_hours::{interval_minutes, shift_work_hours, shift_work_minutes, total_work_hours};
