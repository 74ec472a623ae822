//! Calendar generation for the budget tracker.
//!
//! Builds one [`Week`] record per Monday-to-Sunday run of a target year,
//! walking day by day from the first Monday on or before January 1. Weeks
//! are numbered from that Monday, so the first week may reach back into the
//! previous December; any partial week at the year end is discarded. Leap
//! years need no special casing since the walk follows real calendar dates.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, info};

use crate::domain::dates;
use crate::domain::models::week::Week;
use crate::storage::csv::{CsvConnection, WeekRepository};
use crate::storage::WeekStorage;

/// Service generating the week records of a year.
#[derive(Clone)]
pub struct CalendarService {
    week_repository: WeekRepository,
}

impl CalendarService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            week_repository: WeekRepository::new((*connection).clone()),
        }
    }

    /// Generate every week of `year`.
    ///
    /// Each week is attributed to the zero-based month containing its
    /// Sunday; once a month's last day is reached, the month's accumulated
    /// week numbers are written back onto all of its weeks. The generator
    /// performs no dedup; callers check for existing weeks before invoking.
    pub fn setup_year(&self, year: i32) -> Result<()> {
        let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| anyhow!("Invalid year: {}", year))?;

        // Walk back to the preceding Monday when the year starts mid-week.
        let weekday = jan_first.weekday().number_from_monday();
        let mut day = jan_first;
        if weekday != 1 {
            day = jan_first - Duration::days(i64::from(weekday - 1));
        }
        info!("📅 CALENDAR: generating {}, starting from {}", year, day);

        let mut month: u32 = 0;
        let mut day_tracker: u32 = 1;
        let mut days_in_month = dates::days_in_month(year, month);
        let mut dates_in_week: Vec<NaiveDate> = Vec::with_capacity(7);
        let mut weeks_in_month: Vec<u32> = Vec::new();

        while day.year() <= year {
            dates_in_week.push(day);

            // Every seventh day closes a week.
            if day_tracker % 7 == 0 {
                let week_number = day_tracker / 7;
                debug!(
                    "📅 CALENDAR: week {} ended on {} (month {})",
                    week_number, day, month
                );
                weeks_in_month.push(week_number);
                let week = Week::new(year, month, week_number, std::mem::take(&mut dates_in_week));
                self.week_repository.store_week(&week)?;
            }

            // Month boundary. Days carried over from the previous December
            // do not close a month of the target year.
            if day.day() == days_in_month && day.year() == year {
                debug!("📅 CALENDAR: last day of month {}: {}", month, day);
                for mut week in self.week_repository.list_weeks_for_month(year, month)? {
                    week.weeks_in_month = weeks_in_month.clone();
                    self.week_repository.update_week(&week)?;
                }
                weeks_in_month.clear();
                month += 1;
                days_in_month = dates::days_in_month(year, month);
            }

            day_tracker += 1;
            day = day
                .succ_opt()
                .ok_or_else(|| anyhow!("Calendar overflow past {}", day))?;
        }

        info!("📅 CALENDAR: generated {} weeks for {}", (day_tracker - 1) / 7, year);
        Ok(())
    }
}
