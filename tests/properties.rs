//! Property tests for the Shift Pay Engine.
//!
//! These hold for every input, not just the hand-picked scenarios in
//! `integration.rs`.

use proptest::prelude::*;
use rust_decimal::Decimal;

use shift_pay_engine::calculation::{
    calculate_shift_pay, interval_night_minutes, normalize, shift_pay, shift_work_hours,
};
use shift_pay_engine::config::{MAX_TIMELINE_HOURS, PayRules};
use shift_pay_engine::models::{Attendance, ClockTime, HourlyRate};

fn clock_time() -> impl Strategy<Value = ClockTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| ClockTime::from_hm(h, m).unwrap())
}

fn attendance() -> impl Strategy<Value = Attendance> {
    (
        proptest::option::weighted(0.9, clock_time()),
        proptest::option::weighted(0.9, clock_time()),
    )
        .prop_map(|(start, end)| Attendance { start, end })
}

fn attendances() -> impl Strategy<Value = Vec<Attendance>> {
    prop::collection::vec(attendance(), 0..6)
}

fn from_minutes(minutes: u32) -> ClockTime {
    ClockTime::from_hm(minutes / 60, minutes % 60).unwrap()
}

proptest! {
    #[test]
    fn equal_times_contribute_nothing(time in clock_time(), earlier in attendances()) {
        let mut with_equal = earlier.clone();
        with_equal.push(Attendance::new(time, time));

        prop_assert_eq!(shift_work_hours(&[Attendance::new(time, time)]), Decimal::ZERO);
        prop_assert_eq!(shift_work_hours(&with_equal), shift_work_hours(&earlier));
    }

    #[test]
    fn pay_is_never_negative(rate in 0u32..10_000, list in attendances()) {
        let pay = shift_pay(&rate.to_string(), &list);
        prop_assert!(pay >= Decimal::ZERO);
    }

    #[test]
    fn non_numeric_rate_pays_zero(text in "[a-z ]{0,8}", list in attendances()) {
        prop_assert_eq!(shift_pay(&text, &list), Decimal::ZERO);
    }

    #[test]
    fn appending_never_decreases_hours(list in attendances(), extra in attendance()) {
        let before = shift_work_hours(&list);
        let mut extended = list.clone();
        extended.push(extra);
        prop_assert!(shift_work_hours(&extended) >= before);
    }

    #[test]
    fn night_minutes_never_exceed_duration(list in attendances()) {
        let windows = PayRules::default().night_windows;
        for interval in normalize(&list).into_iter().flatten() {
            let night = interval_night_minutes(&interval, &windows);
            prop_assert!(night <= interval.duration_minutes());
        }
    }

    #[test]
    fn offsets_stay_on_the_timeline(list in attendances()) {
        for interval in normalize(&list).into_iter().flatten() {
            prop_assert!(interval.start <= interval.end);
            prop_assert!(interval.end.hour < MAX_TIMELINE_HOURS);
        }
    }

    #[test]
    fn overtime_only_past_threshold(rate in 1u32..5_000, list in attendances()) {
        let rules = PayRules::default();
        let result = calculate_shift_pay(HourlyRate::new(Decimal::from(rate)), &list, &rules);
        let over = result.work_hours > rules.daily_overtime_threshold_hours;
        prop_assert_eq!(result.overtime_hours > Decimal::ZERO, over);
        if !over {
            prop_assert_eq!(result.overtime_pay, Decimal::ZERO);
        }
    }

    #[test]
    fn total_is_sum_of_components(rate in 0u32..5_000, list in attendances()) {
        let rate = HourlyRate::new(Decimal::from(rate));
        let result = calculate_shift_pay(rate, &list, &PayRules::default());
        prop_assert_eq!(
            result.total_pay,
            result.base_pay + result.overtime_pay + result.night_pay
        );
    }

    #[test]
    fn chronological_daytime_run_is_untouched(
        mut marks in prop::collection::vec(0u32..1440, 0..8)
    ) {
        marks.sort_unstable();
        let list: Vec<Attendance> = marks
            .chunks_exact(2)
            .map(|pair| Attendance::new(from_minutes(pair[0]), from_minutes(pair[1])))
            .collect();

        for (attendance, interval) in list.iter().zip(normalize(&list)) {
            let interval = interval.unwrap();
            let (start, end) = attendance.clock_pair().unwrap();
            prop_assert_eq!(
                (interval.start.hour, interval.start.minute),
                (start.hour(), start.minute())
            );
            prop_assert_eq!(
                (interval.end.hour, interval.end.minute),
                (end.hour(), end.minute())
            );
        }
    }
}
