//! ## [21.4.1 Overview of Date Objects and Definitions of Abstract Operations](https://tc39.es/ecma262/#sec-overview-of-date-objects-and-definitions-of-abstract-operations)
//!
//! Time values are milliseconds since the epoch, UTC, as `f64`. All the
//! `modulo` steps use floor-modulo, so times before 1970 land in the right
//! day, hour and month.

use num_integer::Integer;

use crate::math::{floor, modulo};
use crate::meta::assert;
use crate::type_conversion::integer_part;

/// Hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;
/// Minutes in an hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
/// Milliseconds in a second.
pub const MS_PER_SECOND: f64 = 1000.0;
/// Milliseconds in a minute.
pub const MS_PER_MINUTE: f64 = MS_PER_SECOND * SECONDS_PER_MINUTE;
/// Milliseconds in an hour.
pub const MS_PER_HOUR: f64 = MS_PER_MINUTE * MINUTES_PER_HOUR;
/// Milliseconds in a day.
pub const MS_PER_DAY: f64 = 86_400_000.0;
/// The largest magnitude a time value may have: 100,000,000 days.
pub const MAX_TIME: f64 = 8.64e15;

/// Day-within-year on which each month starts in a common year.
const MONTH_STARTS: [f64; 12] = [
    0.0, 31.0, 59.0, 90.0, 120.0, 151.0, 181.0, 212.0, 243.0, 273.0, 304.0, 334.0,
];

/// [Day ( t )](https://tc39.es/ecma262/#sec-day)
pub fn day(t: f64) -> f64 {
    floor(t / MS_PER_DAY)
}

/// [TimeWithinDay ( t )](https://tc39.es/ecma262/#sec-timewithinday)
pub fn time_within_day(t: f64) -> f64 {
    modulo(t, MS_PER_DAY)
}

/// [HourFromTime ( t )](https://tc39.es/ecma262/#sec-hourfromtime)
pub fn hour_from_time(t: f64) -> f64 {
    modulo(floor(t / MS_PER_HOUR), HOURS_PER_DAY)
}

/// [MinFromTime ( t )](https://tc39.es/ecma262/#sec-minfromtime)
pub fn min_from_time(t: f64) -> f64 {
    modulo(floor(t / MS_PER_MINUTE), MINUTES_PER_HOUR)
}

/// [SecFromTime ( t )](https://tc39.es/ecma262/#sec-secfromtime)
pub fn sec_from_time(t: f64) -> f64 {
    modulo(floor(t / MS_PER_SECOND), SECONDS_PER_MINUTE)
}

/// [msFromTime ( t )](https://tc39.es/ecma262/#sec-msfromtime)
pub fn ms_from_time(t: f64) -> f64 {
    modulo(t, MS_PER_SECOND)
}

/// [WeekDay ( t )](https://tc39.es/ecma262/#sec-weekday): 0 is Sunday.
pub fn week_day(t: f64) -> f64 {
    modulo(day(t) + 4.0, 7.0)
}

/// [DaysInYear ( y )](https://tc39.es/ecma262/#sec-daysinyear)
pub fn days_in_year(y: f64) -> f64 {
    assert(y.is_finite() && y.fract() == 0.0, "year is not an integer");
    if y % 4.0 != 0.0 {
        365.0
    } else if y % 100.0 != 0.0 {
        366.0
    } else if y % 400.0 != 0.0 {
        365.0
    } else {
        366.0
    }
}

/// [DayFromYear ( y )](https://tc39.es/ecma262/#sec-dayfromyear): the day
/// number of the first day of year `y`.
pub fn day_from_year(y: f64) -> f64 {
    365.0 * (y - 1970.0) + floor((y - 1969.0) / 4.0) - floor((y - 1901.0) / 100.0)
        + floor((y - 1601.0) / 400.0)
}

fn day_from_year_exact(y: i64) -> i64 {
    365 * (y - 1970) + Integer::div_floor(&(y - 1969), &4) - Integer::div_floor(&(y - 1901), &100)
        + Integer::div_floor(&(y - 1601), &400)
}

/// [TimeFromYear ( y )](https://tc39.es/ecma262/#sec-timefromyear)
pub fn time_from_year(y: f64) -> f64 {
    MS_PER_DAY * day_from_year(y)
}

/// [YearFromTime ( t )](https://tc39.es/ecma262/#sec-yearfromtime): the
/// largest year `y` with `TimeFromYear(y) <= t`.
///
/// `t` must be a time value, i.e. no further than [`MAX_TIME`] from the
/// epoch.
pub fn year_from_time(t: f64) -> f64 {
    assert(t.abs() <= MAX_TIME, "time value out of range");
    let day = day(t) as i64;
    // 146097 days per 400-year cycle; the estimate is off by at most one.
    let mut year = 1970 + Integer::div_floor(&(day * 400), &146_097);
    while day_from_year_exact(year) > day {
        year -= 1;
    }
    while day_from_year_exact(year + 1) <= day {
        year += 1;
    }
    year as f64
}

/// [InLeapYear ( t )](https://tc39.es/ecma262/#sec-inleapyear): 1 in a leap
/// year, otherwise 0.
pub fn in_leap_year(t: f64) -> f64 {
    days_in_year(year_from_time(t)) - 365.0
}

/// [DayWithinYear ( t )](https://tc39.es/ecma262/#sec-daywithinyear)
pub fn day_within_year(t: f64) -> f64 {
    day(t) - day_from_year(year_from_time(t))
}

fn month_start(month: usize, leap: f64) -> f64 {
    MONTH_STARTS[month] + if month >= 2 { leap } else { 0.0 }
}

/// [MonthFromTime ( t )](https://tc39.es/ecma262/#sec-monthfromtime):
/// 0 is January.
pub fn month_from_time(t: f64) -> f64 {
    let day = day_within_year(t);
    let leap = in_leap_year(t);
    (0..12)
        .rev()
        .find(|&month| day >= month_start(month, leap))
        .unwrap_or(0) as f64
}

/// [DateFromTime ( t )](https://tc39.es/ecma262/#sec-datefromtime): the day
/// of the month, from 1.
pub fn date_from_time(t: f64) -> f64 {
    let month = month_from_time(t) as usize;
    day_within_year(t) - month_start(month, in_leap_year(t)) + 1.0
}

/// [MakeTime ( hour, min, sec, ms )](https://tc39.es/ecma262/#sec-maketime)
///
/// NaN if any argument is not finite.
pub fn make_time(hour: f64, min: f64, sec: f64, ms: f64) -> f64 {
    if ![hour, min, sec, ms].iter().all(|n| n.is_finite()) {
        return f64::NAN;
    }
    integer_part(hour) * MS_PER_HOUR
        + integer_part(min) * MS_PER_MINUTE
        + integer_part(sec) * MS_PER_SECOND
        + integer_part(ms)
}

/// [MakeDay ( year, month, date )](https://tc39.es/ecma262/#sec-makeday)
///
/// Months outside 0..12 roll over into neighbouring years. NaN if any
/// argument is not finite or the year is far outside the time value range.
///
/// ```
/// use abstract_ops::date_time::make_day;
///
/// // 2020-01-01
/// assert_eq!(make_day(2019.0, 12.0, 1.0), 18262.0);
/// ```
pub fn make_day(year: f64, month: f64, date: f64) -> f64 {
    if ![year, month, date].iter().all(|n| n.is_finite()) {
        return f64::NAN;
    }
    let y = integer_part(year);
    let m = integer_part(month);
    let dt = integer_part(date);
    let ym = y + floor(m / 12.0);
    // Far beyond +-MAX_TIME; no time value can fall in such a year.
    if ym.abs() > 400_000.0 {
        return f64::NAN;
    }
    let mn = modulo(m, 12.0) as usize;
    let leap = days_in_year(ym) - 365.0;
    day_from_year(ym) + month_start(mn, leap) + dt - 1.0
}

/// [MakeDate ( day, time )](https://tc39.es/ecma262/#sec-makedate)
pub fn make_date(day: f64, time: f64) -> f64 {
    if !day.is_finite() || !time.is_finite() {
        return f64::NAN;
    }
    let tv = day * MS_PER_DAY + time;
    if tv.is_finite() {
        tv
    } else {
        f64::NAN
    }
}

/// [TimeClip ( time )](https://tc39.es/ecma262/#sec-timeclip)
///
/// NaN outside `-MAX_TIME..=MAX_TIME`; `-0` becomes `+0`.
pub fn time_clip(time: f64) -> f64 {
    if !time.is_finite() || time.abs() > MAX_TIME {
        return f64::NAN;
    }
    integer_part(time) + 0.0
}
