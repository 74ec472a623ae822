//! Completion forecasting for the main savings goal.
//!
//! Projects the week a goal will be fully saved from its weekly allocation,
//! then resolves that week to a concrete Monday. The projection treats
//! every year as exactly 52 weeks, so an exact multiple of 52 lands on
//! week 52 of the incremented year.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use shared::NO_ALLOCATION_LABEL;

use crate::domain::dates;
use crate::domain::models::goal::Goal;
use crate::storage::csv::{CsvConnection, GoalRepository};
use crate::storage::GoalStorage;

/// A resolved goal projection.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalForecast {
    /// Whole weeks of allocation still needed.
    pub weeks_left: i64,
    /// Week number the goal completes in, wrapped into 1..=52.
    pub week_achieved: i64,
    pub year_achieved: i32,
    /// Monday of the achieved week.
    pub achieved_on: NaiveDate,
}

/// Service projecting the main goal's completion date.
#[derive(Clone)]
pub struct ForecastService {
    goal_repository: GoalRepository,
}

impl ForecastService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            goal_repository: GoalRepository::new((*connection).clone()),
        }
    }

    /// The "achieved by" label for the main goal, computed from today's
    /// `year` and `week_number`. Falls back to [`NO_ALLOCATION_LABEL`] when
    /// no main goal exists or nothing is allocated to it.
    pub fn main_goal_achieved_by(&self, year: i32, week_number: u32) -> Result<String> {
        match self.goal_repository.get_main_goal()? {
            Some(goal) => Ok(Self::achieved_by_label(&goal, year, week_number)),
            None => Ok(NO_ALLOCATION_LABEL.to_string()),
        }
    }

    /// Format a goal's projection as "16th of April", appending the year
    /// whenever the projection leaves the current one.
    pub fn achieved_by_label(goal: &Goal, year: i32, week_number: u32) -> String {
        match Self::forecast(goal, year, week_number) {
            Some(forecast) => {
                let mut label = format!(
                    "{} of {}",
                    dates::ordinal_day(forecast.achieved_on.day()),
                    dates::month_name(forecast.achieved_on.month0()),
                );
                if forecast.year_achieved != year {
                    label.push(' ');
                    label.push_str(&forecast.year_achieved.to_string());
                }
                label
            }
            None => NO_ALLOCATION_LABEL.to_string(),
        }
    }

    /// Pure projection from `year`/`week_number`. `None` when the weekly
    /// allocation is zero or negative, never a division error.
    pub fn forecast(goal: &Goal, year: i32, week_number: u32) -> Option<GoalForecast> {
        if goal.allocated <= Decimal::ZERO {
            return None;
        }

        let remaining = goal.cost - goal.saved;
        let weeks_left = (remaining / goal.allocated).ceil().to_i64()?;

        let mut year_achieved = year;
        let mut week_achieved = i64::from(week_number) + weeks_left;
        if week_achieved > 52 {
            year_achieved += (week_achieved / 52) as i32;
            week_achieved %= 52;
            if week_achieved == 0 {
                week_achieved = 52;
            }
        }

        let achieved_on = dates::start_date_of_week(week_achieved, year_achieved)?;
        Some(GoalForecast {
            weeks_left,
            week_achieved,
            year_achieved,
            achieved_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::sample_goal;

    #[test]
    fn test_forecast_within_the_year() {
        let goal = sample_goal("New bike", 1000, 100, 400, true);
        let forecast = ForecastService::forecast(&goal, 2024, 10).expect("Forecast expected");
        assert_eq!(forecast.weeks_left, 6);
        assert_eq!(forecast.week_achieved, 16);
        assert_eq!(forecast.year_achieved, 2024);
        // Week 16 of 2024 starts on April 15.
        assert_eq!(
            forecast.achieved_on,
            NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
        );
    }

    #[test]
    fn test_forecast_rounds_partial_weeks_up() {
        let goal = sample_goal("New bike", 400, 30, 0, true);
        let forecast = ForecastService::forecast(&goal, 2024, 11).expect("Forecast expected");
        // 400 / 30 = 13.33 weeks, so 14.
        assert_eq!(forecast.weeks_left, 14);
        assert_eq!(forecast.week_achieved, 25);
    }

    #[test]
    fn test_forecast_wraps_into_the_next_year() {
        let goal = sample_goal("Car", 500, 100, 0, true);
        let forecast = ForecastService::forecast(&goal, 2024, 50).expect("Forecast expected");
        assert_eq!(forecast.weeks_left, 5);
        assert_eq!(forecast.week_achieved, 3);
        assert_eq!(forecast.year_achieved, 2025);
    }

    #[test]
    fn test_forecast_exact_multiple_of_52_lands_on_week_52() {
        let goal = sample_goal("House deposit", 9400, 100, 0, true);
        let forecast = ForecastService::forecast(&goal, 2024, 10).expect("Forecast expected");
        // 94 weeks from week 10 is week 104: two wrapped years, week 52.
        assert_eq!(forecast.weeks_left, 94);
        assert_eq!(forecast.week_achieved, 52);
        assert_eq!(forecast.year_achieved, 2026);
    }

    #[test]
    fn test_forecast_without_allocation_is_undefined() {
        let goal = sample_goal("New bike", 1000, 0, 400, true);
        assert_eq!(ForecastService::forecast(&goal, 2024, 10), None);
        assert_eq!(
            ForecastService::achieved_by_label(&goal, 2024, 10),
            NO_ALLOCATION_LABEL
        );
    }

    #[test]
    fn test_label_inside_current_year_omits_the_year() {
        let goal = sample_goal("New bike", 1000, 100, 400, true);
        assert_eq!(
            ForecastService::achieved_by_label(&goal, 2024, 10),
            "15th of April"
        );
    }

    #[test]
    fn test_label_in_a_later_year_includes_it() {
        let goal = sample_goal("Car", 500, 100, 0, true);
        let label = ForecastService::achieved_by_label(&goal, 2024, 50);
        // Week 3 of 2025 starts on Jan 13 (the first Monday of 2025 is
        // Dec 30 2024).
        assert_eq!(label, "13th of January 2025");
    }
}
