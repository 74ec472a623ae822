//! Pure date helpers shared by the calendar, rollover, and forecast logic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Human-readable name for a zero-based month (0 = January).
pub fn month_name(month0: u32) -> &'static str {
    match month0 {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Invalid Month",
    }
}

/// Weekday name of a date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Day of month with its ordinal suffix: 1st, 2nd, 3rd, 4th... 11th-13th
/// always take "th".
pub fn ordinal_day(day: u32) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", day, suffix)
}

/// The first Monday on or before January 1 of `year`.
pub fn first_monday_of_year(year: i32) -> Option<NaiveDate> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = jan_first.weekday().num_days_from_monday() as i64;
    Some(jan_first - Duration::days(offset))
}

/// The Monday starting week `week_number` of `year`, counting week 1 from
/// [`first_monday_of_year`]. Week numbers outside 1..=53 extrapolate
/// linearly in either direction.
pub fn start_date_of_week(week_number: i64, year: i32) -> Option<NaiveDate> {
    let first_monday = first_monday_of_year(year)?;
    first_monday.checked_add_signed(Duration::weeks(week_number - 1))
}

/// Whether February has 29 days in `year`.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days in the zero-based `month0` of `year`. A month index past December
/// rolls into the following year, which keeps a year-end scan simple.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (year, month0) = if month0 >= 12 {
        (year + 1, month0 - 12)
    } else {
        (year, month0)
    };
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}
