//! # CSV Week Repository
//!
//! Stores the generated calendar weeks in `weeks.csv`. The two list-valued
//! fields are flattened to semicolon-joined scalars:
//!
//! ```csv
//! id,year,month,week_number,weeks_in_month,dates_in_week,spent,allocated,is_current_week
//! week::2024_1,2024,0,1,1;2;3;4,2024-01-01;...;2024-01-07,0,450,true
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::connection::CsvConnection;
use super::{read_records, write_records};
use crate::domain::models::week::Week;
use crate::storage::traits::WeekStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV record structure for weeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeekRecord {
    id: String,
    year: i32,
    month: u32,
    week_number: u32,
    weeks_in_month: String,
    dates_in_week: String,
    spent: Decimal,
    allocated: Decimal,
    is_current_week: bool,
}

impl From<Week> for WeekRecord {
    fn from(week: Week) -> Self {
        WeekRecord {
            id: week.id,
            year: week.year,
            month: week.month,
            week_number: week.week_number,
            weeks_in_month: week
                .weeks_in_month
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            dates_in_week: week
                .dates_in_week
                .iter()
                .map(|date| date.format(DATE_FORMAT).to_string())
                .collect::<Vec<_>>()
                .join(";"),
            spent: week.spent,
            allocated: week.allocated,
            is_current_week: week.is_current_week,
        }
    }
}

impl TryFrom<WeekRecord> for Week {
    type Error = anyhow::Error;

    fn try_from(record: WeekRecord) -> Result<Self> {
        let weeks_in_month = if record.weeks_in_month.is_empty() {
            Vec::new()
        } else {
            record
                .weeks_in_month
                .split(';')
                .map(|number| {
                    number
                        .parse::<u32>()
                        .map_err(|e| anyhow!("Invalid week number '{}': {}", number, e))
                })
                .collect::<Result<Vec<_>>>()?
        };
        let dates_in_week = if record.dates_in_week.is_empty() {
            Vec::new()
        } else {
            record
                .dates_in_week
                .split(';')
                .map(|date| {
                    NaiveDate::parse_from_str(date, DATE_FORMAT)
                        .map_err(|e| anyhow!("Invalid date '{}': {}", date, e))
                })
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Week {
            id: record.id,
            year: record.year,
            month: record.month,
            week_number: record.week_number,
            weeks_in_month,
            dates_in_week,
            spent: record.spent,
            allocated: record.allocated,
            is_current_week: record.is_current_week,
        })
    }
}

/// CSV-backed week repository.
#[derive(Clone)]
pub struct WeekRepository {
    connection: CsvConnection,
}

impl WeekRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn file_path(&self) -> PathBuf {
        self.connection.data_file("weeks.csv")
    }

    fn read_all(&self) -> Result<Vec<Week>> {
        read_records::<WeekRecord>(&self.file_path())?
            .into_iter()
            .map(Week::try_from)
            .collect()
    }

    fn write_all(&self, weeks: Vec<Week>) -> Result<()> {
        let records: Vec<WeekRecord> = weeks.into_iter().map(WeekRecord::from).collect();
        write_records(&self.file_path(), &records)
    }
}

impl WeekStorage for WeekRepository {
    fn store_week(&self, week: &Week) -> Result<()> {
        let mut weeks = self.read_all()?;
        weeks.push(week.clone());
        self.write_all(weeks)
    }

    fn get_week(&self, year: i32, week_number: u32) -> Result<Option<Week>> {
        Ok(self
            .read_all()?
            .into_iter()
            .find(|week| week.year == year && week.week_number == week_number))
    }

    fn get_current_week(&self) -> Result<Option<Week>> {
        Ok(self.read_all()?.into_iter().find(|week| week.is_current_week))
    }

    fn list_weeks(&self) -> Result<Vec<Week>> {
        self.read_all()
    }

    fn list_weeks_for_month(&self, year: i32, month: u32) -> Result<Vec<Week>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|week| week.year == year && week.month == month)
            .collect())
    }

    fn update_week(&self, week: &Week) -> Result<()> {
        let mut weeks = self.read_all()?;
        let position = weeks
            .iter()
            .position(|stored| stored.id == week.id)
            .ok_or_else(|| anyhow!("Week not found: {}", week.id))?;
        weeks[position] = week.clone();
        self.write_all(weeks)
    }

    fn set_exclusive_current(&self, year: i32, week_number: u32) -> Result<()> {
        let mut weeks = self.read_all()?;
        if !weeks
            .iter()
            .any(|week| week.year == year && week.week_number == week_number)
        {
            return Err(anyhow!("Week not found: {}", Week::generate_id(year, week_number)));
        }
        for week in &mut weeks {
            week.is_current_week = week.year == year && week.week_number == week_number;
        }
        self.write_all(weeks)
    }
}
