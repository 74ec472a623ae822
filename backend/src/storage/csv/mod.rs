//! # CSV Storage Module
//!
//! File-based storage implementation for the budget tracker. One CSV file
//! per entity lives under the connection's data directory:
//!
//! ```text
//! data/
//! ├── weeks.csv
//! ├── expenses.csv
//! ├── purchases.csv
//! ├── goals.csv
//! ├── bills.csv
//! └── incomes.csv
//! ```
//!
//! Every repository reads its whole file, applies the change in memory, and
//! rewrites the file through a temp-file rename, so a partial write never
//! replaces good data. List-valued week fields are stored as
//! semicolon-joined scalars.

pub mod bill_repository;
pub mod connection;
pub mod expense_repository;
pub mod goal_repository;
pub mod income_repository;
pub mod purchase_repository;
pub mod week_repository;

#[cfg(test)]
pub mod test_utils;

pub use bill_repository::BillRepository;
pub use connection::CsvConnection;
pub use expense_repository::ExpenseRepository;
pub use goal_repository::GoalRepository;
pub use income_repository::IncomeRepository;
pub use purchase_repository::PurchaseRepository;
pub use week_repository::WeekRepository;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Result;
use csv::{Reader, Writer};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read every record of a CSV file. A missing file is an empty collection.
pub(crate) fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

/// Rewrite a CSV file atomically: serialize to `<file>.tmp`, then rename
/// over the original.
pub(crate) fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let tmp_path = path.with_extension("csv.tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = Writer::from_writer(BufWriter::new(file));
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}
