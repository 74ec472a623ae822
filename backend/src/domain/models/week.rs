use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::dates;

/// One generated calendar week.
///
/// Weeks are created in bulk by the calendar service, one per
/// Monday-to-Sunday run of the year, and afterwards only mutated by the
/// week rollover (`spent`, `allocated`, `is_current_week`). Exactly one
/// week system-wide carries `is_current_week = true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    /// Natural key: `week::{year}_{week_number}`.
    pub id: String,
    pub year: i32,
    /// Zero-based calendar month (0 = January) the week was attributed to
    /// when generated: the month containing its Sunday.
    pub month: u32,
    /// 1-based week number within the generated year.
    pub week_number: u32,
    /// Week numbers belonging to this week's month, ascending. Filled in
    /// by the calendar service once the month is complete.
    pub weeks_in_month: Vec<u32>,
    /// The seven dates of the week, Monday through Sunday.
    pub dates_in_week: Vec<NaiveDate>,
    pub spent: Decimal,
    pub allocated: Decimal,
    pub is_current_week: bool,
}

impl Week {
    pub fn generate_id(year: i32, week_number: u32) -> String {
        format!("week::{}_{}", year, week_number)
    }

    /// A freshly generated week: no spend, no allocation, not current.
    pub fn new(year: i32, month: u32, week_number: u32, dates_in_week: Vec<NaiveDate>) -> Self {
        Self {
            id: Self::generate_id(year, week_number),
            year,
            month,
            week_number,
            weeks_in_month: Vec::new(),
            dates_in_week,
            spent: Decimal::ZERO,
            allocated: Decimal::ZERO,
            is_current_week: false,
        }
    }

    /// Label like "1st of January - 7th of January".
    pub fn date_range(&self) -> String {
        match (self.dates_in_week.first(), self.dates_in_week.last()) {
            (Some(start), Some(end)) => format!(
                "{} of {} - {} of {}",
                dates::ordinal_day(start.day()),
                dates::month_name(start.month0()),
                dates::ordinal_day(end.day()),
                dates::month_name(end.month0()),
            ),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn week_of(start: NaiveDate) -> Week {
        let dates = (0..7).map(|d| start + Duration::days(d)).collect();
        Week::new(start.year(), start.month0(), 1, dates)
    }

    #[test]
    fn test_date_range_within_one_month() {
        let week = week_of(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(week.date_range(), "1st of January - 7th of January");
    }

    #[test]
    fn test_date_range_across_months() {
        let week = week_of(NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
        assert_eq!(week.date_range(), "29th of January - 4th of February");
    }

    #[test]
    fn test_date_range_teen_days_use_th() {
        let week = week_of(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(week.date_range(), "11th of March - 17th of March");
    }

    #[test]
    fn test_generate_id() {
        assert_eq!(Week::generate_id(2024, 11), "week::2024_11");
    }
}
