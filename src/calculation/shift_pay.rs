//! Shift pay calculation.
//!
//! Pay for one shift is base pay for every worked hour, plus a surcharge of
//! `premium_ratio` times the base rate for each overtime hour and for each
//! hour inside a night window. The two surcharges stack: an overtime hour
//! worked at night earns both.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PayRules;
use crate::models::{Attendance, AuditStep, HourlyRate, Shift};

use super::daily_overtime::detect_daily_overtime;
use super::night_premium::{NightOverlap, night_overlaps};
use super::normalize::{DayCrossing, MINUTES_PER_HOUR, NormalizedInterval, normalize};
use super::work_hours::interval_minutes;

/// The full breakdown of one shift's pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPayResult {
    /// The base rate used, or `None` when the shift had no valid rate or
    /// its pay could not be represented.
    pub hourly_rate: Option<Decimal>,
    /// One entry per attendance; `None` for incomplete ones.
    pub intervals: Vec<Option<NormalizedInterval>>,
    /// Total hours worked.
    pub work_hours: Decimal,
    /// Base rate times worked hours.
    pub base_pay: Decimal,
    /// Hours past the daily overtime threshold.
    pub overtime_hours: Decimal,
    /// Surcharge paid on overtime hours.
    pub overtime_pay: Decimal,
    /// Night minutes per configured window.
    pub night_overlaps: Vec<NightOverlap>,
    /// Total hours inside night windows.
    pub night_hours: Decimal,
    /// Surcharge paid on night hours.
    pub night_pay: Decimal,
    /// Base pay plus both surcharges.
    pub total_pay: Decimal,
    /// The decisions taken, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Parses rate text at the input boundary.
///
/// A non-blank value that does not parse is logged; the caller receives
/// `None`, which pays zero.
pub fn resolve_hourly_rate(text: &str) -> Option<HourlyRate> {
    let rate = HourlyRate::parse(text);
    if rate.is_none() && !text.trim().is_empty() {
        warn!(hourly_rate = %text, "Hourly rate is not a valid non-negative number, paying zero");
    }
    rate
}

fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / MINUTES_PER_HOUR
}

fn pay_for_minutes(rate: Decimal, minutes: u32) -> Option<Decimal> {
    rate.checked_mul(Decimal::from(minutes))?.checked_div(MINUTES_PER_HOUR)
}

/// Money amounts for one shift. All zero when there is no rate.
#[derive(Debug, Default)]
struct PayComponents {
    premium_rate: Decimal,
    base_pay: Decimal,
    overtime_pay: Decimal,
    night_pay: Decimal,
    total_pay: Decimal,
}

/// Prices the measured hours, or `None` if any amount leaves the decimal range.
fn price_shift(
    base_rate: Decimal,
    premium_ratio: Decimal,
    work_minutes: u32,
    overtime_hours: Decimal,
    night_minutes: u32,
) -> Option<PayComponents> {
    let premium_rate = base_rate.checked_mul(premium_ratio)?;
    let base_pay = pay_for_minutes(base_rate, work_minutes)?;
    let overtime_pay = premium_rate.checked_mul(overtime_hours)?;
    let night_pay = pay_for_minutes(premium_rate, night_minutes)?;
    let total_pay = base_pay.checked_add(overtime_pay)?.checked_add(night_pay)?;

    Some(PayComponents {
        premium_rate,
        base_pay,
        overtime_pay,
        night_pay,
        total_pay,
    })
}

fn normalization_step(
    step_number: u32,
    attendances: &[Attendance],
    intervals: &[Option<NormalizedInterval>],
) -> AuditStep {
    let complete = intervals.iter().flatten().count();
    let crossed = intervals
        .iter()
        .flatten()
        .filter(|interval| interval.crossing != DayCrossing::None)
        .count();
    let placed: Vec<serde_json::Value> = intervals
        .iter()
        .map(|interval| match interval {
            Some(interval) => serde_json::json!({
                "start_hours": interval.start.as_hours().normalize().to_string(),
                "end_hours": interval.end.as_hours().normalize().to_string(),
                "crossing": interval.crossing,
            }),
            None => serde_json::Value::Null,
        })
        .collect();

    AuditStep {
        step_number,
        rule_id: "interval_normalization".to_string(),
        rule_name: "Midnight Crossing Normalization".to_string(),
        input: serde_json::json!({ "attendances": attendances }),
        output: serde_json::json!({ "intervals": placed }),
        reasoning: format!(
            "{} of {} attendance(s) complete; {} moved across midnight",
            complete,
            attendances.len(),
            crossed
        ),
    }
}

/// Calculates pay for one shift, with a full breakdown.
///
/// This function:
/// 1. Normalizes the attendances onto one timeline
/// 2. Sums worked hours and pays them at the base rate
/// 3. Adds the overtime surcharge for hours past the daily threshold
/// 4. Adds the night surcharge for minutes inside each night window
///
/// A missing rate is not an error: every pay component is zero, while the
/// hour figures are still reported. A rate so large that any amount would
/// leave the `Decimal` range is handled the same way.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::calculate_shift_pay;
/// use shift_pay_engine::config::PayRules;
/// use shift_pay_engine::models::{Attendance, HourlyRate};
/// use rust_decimal::Decimal;
///
/// let attendances = vec![Attendance::parse("13:00", "23:00").unwrap()];
/// let result = calculate_shift_pay(HourlyRate::parse("1000"), &attendances, &PayRules::default());
///
/// assert_eq!(result.work_hours, Decimal::from(10));
/// assert_eq!(result.base_pay, Decimal::from(10000));
/// assert_eq!(result.overtime_pay, Decimal::from(500)); // 2h * 250
/// assert_eq!(result.night_pay, Decimal::from(250)); // 22:00-23:00
/// assert_eq!(result.total_pay, Decimal::from(10750));
/// ```
pub fn calculate_shift_pay(
    rate: Option<HourlyRate>,
    attendances: &[Attendance],
    rules: &PayRules,
) -> ShiftPayResult {
    let mut audit_steps = Vec::new();

    // Measure the shift, then price it.
    let intervals = normalize(attendances);
    let work_minutes = interval_minutes(&intervals);
    let work_hours = minutes_to_hours(work_minutes);
    let overtime = detect_daily_overtime(work_hours, rules.daily_overtime_threshold_hours, 4);
    let overtime_hours = overtime.overtime_hours;
    let overlaps = night_overlaps(&intervals, &rules.night_windows);
    let night_minutes: u32 = overlaps.iter().map(|o| o.minutes).sum();
    let night_hours = minutes_to_hours(night_minutes);

    let priced = rate.map(|r| {
        price_shift(
            r.value(),
            rules.premium_ratio,
            work_minutes,
            overtime_hours,
            night_minutes,
        )
    });
    let (applied_rate, pay) = match priced {
        Some(Some(pay)) => (rate, pay),
        Some(None) => {
            warn!(
                hourly_rate = %rate.map(|r| r.value()).unwrap_or_default(),
                "Shift pay exceeds the decimal range, paying zero"
            );
            (None, PayComponents::default())
        }
        None => (None, PayComponents::default()),
    };
    let base_rate = applied_rate.map(|r| r.value()).unwrap_or(Decimal::ZERO);

    // Step 1: Place attendances on the timeline
    audit_steps.push(normalization_step(1, attendances, &intervals));

    // Step 2: Resolve the base rate
    audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate Resolution".to_string(),
        input: serde_json::json!({
            "hourly_rate": rate.map(|r| r.value().normalize().to_string()),
            "premium_ratio": rules.premium_ratio.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_rate": base_rate.normalize().to_string(),
            "premium_rate": pay.premium_rate.normalize().to_string()
        }),
        reasoning: match (rate, applied_rate) {
            (Some(r), Some(_)) => format!(
                "Base rate {} with surcharge {} per qualifying hour",
                r.value().normalize(),
                pay.premium_rate.normalize()
            ),
            (Some(r), None) => format!(
                "Hourly rate {} prices this shift beyond the decimal range; shift pay is zero",
                r.value().normalize()
            ),
            (None, _) => "No valid hourly rate; shift pay is zero".to_string(),
        },
    });

    // Step 3: Base pay for all worked time
    audit_steps.push(AuditStep {
        step_number: 3,
        rule_id: "base_pay".to_string(),
        rule_name: "Base Pay".to_string(),
        input: serde_json::json!({
            "work_minutes": work_minutes,
            "base_rate": base_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "work_hours": work_hours.normalize().to_string(),
            "base_pay": pay.base_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} minutes worked at {} per hour",
            work_minutes,
            base_rate.normalize()
        ),
    });

    // Step 4: Overtime surcharge on the shift total
    audit_steps.push(overtime.audit_step);

    // Step 5: Night surcharge, window by window
    audit_steps.push(AuditStep {
        step_number: 5,
        rule_id: "night_premium".to_string(),
        rule_name: "Night Premium".to_string(),
        input: serde_json::json!({
            "windows": overlaps
                .iter()
                .map(|o| format!("[{}, {})", o.window.start_hour, o.window.end_hour))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "window_minutes": overlaps.iter().map(|o| o.minutes).collect::<Vec<_>>(),
            "night_hours": night_hours.normalize().to_string(),
            "night_pay": pay.night_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} minutes inside night windows at surcharge {} per hour",
            night_minutes,
            pay.premium_rate.normalize()
        ),
    });

    // Step 6: Total
    let PayComponents {
        base_pay,
        overtime_pay,
        night_pay,
        total_pay,
        ..
    } = pay;
    audit_steps.push(AuditStep {
        step_number: 6,
        rule_id: "shift_total".to_string(),
        rule_name: "Shift Pay Total".to_string(),
        input: serde_json::json!({
            "base_pay": base_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "night_pay": night_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_pay": total_pay.normalize().to_string()
        }),
        reasoning: format!(
            "Base {} + overtime {} + night {} = {}",
            base_pay.normalize(),
            overtime_pay.normalize(),
            night_pay.normalize(),
            total_pay.normalize()
        ),
    });

    debug!(
        work_hours = %work_hours.normalize(),
        base_pay = %base_pay.normalize(),
        overtime_pay = %overtime_pay.normalize(),
        night_pay = %night_pay.normalize(),
        total_pay = %total_pay.normalize(),
        "Computed shift pay"
    );

    ShiftPayResult {
        hourly_rate: applied_rate.map(|r| r.value()),
        intervals,
        work_hours,
        base_pay,
        overtime_hours,
        overtime_pay,
        night_overlaps: overlaps,
        night_hours,
        night_pay,
        total_pay,
        audit_steps,
    }
}

/// Pay for one shift from the raw rate text, using the default rules.
///
/// Only the leading number of the text is read (`"1000円"` pays at 1000).
/// Text without one, or a negative rate, yields zero.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::shift_pay;
/// use shift_pay_engine::models::Attendance;
/// use rust_decimal::Decimal;
///
/// let attendances = vec![Attendance::parse("09:00", "17:00").unwrap()];
/// assert_eq!(shift_pay("1000", &attendances), Decimal::from(8000));
/// assert_eq!(shift_pay("", &attendances), Decimal::ZERO);
/// ```
pub fn shift_pay(hourly_rate_text: &str, attendances: &[Attendance]) -> Decimal {
    calculate_shift_pay(
        resolve_hourly_rate(hourly_rate_text),
        attendances,
        &PayRules::default(),
    )
    .total_pay
}

/// Sums the cached pay of every shift.
///
/// Nothing is recomputed; each shift keeps its own cache current. A sum
/// past the `Decimal` range saturates at [`Decimal::MAX`].
pub fn total_pay(shifts: &[Shift]) -> Decimal {
    shifts
        .iter()
        .try_fold(Decimal::ZERO, |sum, shift| sum.checked_add(shift.total_pay()))
        .unwrap_or_else(|| {
            warn!(shifts = shifts.len(), "Total pay exceeds the decimal range, saturating");
            Decimal::MAX
        })
}
