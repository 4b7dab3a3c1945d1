//! Unit tests for date arithmetic

use abstract_ops::date_time::{
    date_from_time, day, hour_from_time, make_date, make_day, make_time, min_from_time,
    month_from_time, ms_from_time, sec_from_time, time_clip, time_from_year, week_day,
    year_from_time, MAX_TIME, MS_PER_DAY,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decomposed_time_recomposes(t in -MAX_TIME..=MAX_TIME) {
        let t = t.trunc();
        let rebuilt = make_date(
            make_day(year_from_time(t), month_from_time(t), date_from_time(t)),
            make_time(hour_from_time(t), min_from_time(t), sec_from_time(t), ms_from_time(t)),
        );
        prop_assert_eq!(rebuilt, t);
    }

    #[test]
    fn month_and_date_stay_in_range(t in -MAX_TIME..=MAX_TIME) {
        let month = month_from_time(t);
        let date = date_from_time(t);
        prop_assert!((0.0..12.0).contains(&month));
        prop_assert!((1.0..=31.0).contains(&date));
        prop_assert!(time_from_year(year_from_time(t)) <= t);
    }

    #[test]
    fn consecutive_days_advance_week_day(d in -100_000_000i64..100_000_000) {
        let t = d as f64 * MS_PER_DAY;
        prop_assert_eq!(week_day(t + MS_PER_DAY), (week_day(t) + 1.0) % 7.0);
    }
}

#[cfg(test)]
mod calendar_tests {
    use super::*;

    #[test]
    fn test_epoch_components() {
        assert_eq!(year_from_time(0.0), 1970.0);
        assert_eq!(month_from_time(0.0), 0.0);
        assert_eq!(date_from_time(0.0), 1.0);
        // Thursday
        assert_eq!(week_day(0.0), 4.0);
    }

    #[test]
    fn test_last_millisecond_before_epoch() {
        let t = -1.0;
        assert_eq!(day(t), -1.0);
        assert_eq!(year_from_time(t), 1969.0);
        assert_eq!(month_from_time(t), 11.0);
        assert_eq!(date_from_time(t), 31.0);
        assert_eq!(hour_from_time(t), 23.0);
        assert_eq!(ms_from_time(t), 999.0);
    }

    #[test]
    fn test_century_leap_rules() {
        // 1900-03-01 follows 1900-02-28
        let feb_28 = make_day(1900.0, 1.0, 28.0);
        assert_eq!(make_day(1900.0, 2.0, 1.0), feb_28 + 1.0);
        // 2000-02-29 exists
        let t = make_date(make_day(2000.0, 1.0, 29.0), 0.0);
        assert_eq!(month_from_time(t), 1.0);
        assert_eq!(date_from_time(t), 29.0);
    }

    #[test]
    fn test_negative_month_rolls_back() {
        assert_eq!(make_day(2020.0, -1.0, 1.0), make_day(2019.0, 11.0, 1.0));
    }

    #[test]
    fn test_time_clip_bounds() {
        assert_eq!(time_clip(MAX_TIME), MAX_TIME);
        assert_eq!(time_clip(-MAX_TIME), -MAX_TIME);
        assert!(time_clip(MAX_TIME + 1.0).is_nan());
        assert!(time_clip(f64::NAN).is_nan());
        assert!(time_clip(-0.0).is_sign_positive());
    }

    #[test]
    #[should_panic(expected = "assertion failure")]
    fn test_year_of_non_time_value() {
        year_from_time(MAX_TIME * 2.0);
    }
}
